//! Validation rules for form controls.
//!
//! Every control owns a [`Rules`] list. A rule pairs a [`Validator`] with an
//! optional message; a condition pairs a validator with a nested branch of
//! rules that only applies when the condition holds. Rules run during the
//! validation phase (see [`validate_control`](crate::validate_control)) and
//! the first failing rule produces a [`ValidationFailure`].
//!
//! # Example
//!
//! ```ignore
//! use horizon_forms_core::rules::{Rules, Validator};
//!
//! let mut rules = Rules::new();
//! rules.set_required(true);
//! rules
//!     .add_condition(Validator::Filled)
//!     .add_rule(Validator::Equal(vec!["a".into(), "b".into()]), Some("Pick a or b.".into()));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::control::Control;
use crate::key::Key;
use crate::logging::targets;
use crate::messages::{self, ids};

/// A validation predicate over a control.
pub type CheckFn = Arc<dyn Fn(&dyn Control) -> bool + Send + Sync>;

/// The check a rule or condition performs.
#[derive(Clone)]
pub enum Validator {
    /// The control has a value.
    Filled,
    /// The control has no value.
    Blank,
    /// The control's value equals one of the keys.
    Equal(Vec<Key>),
    /// A check supplied by the control or the application.
    Custom {
        /// Identifier used to look up the default message.
        id: &'static str,
        /// The predicate.
        check: CheckFn,
    },
}

impl Validator {
    /// Create a custom validator.
    pub fn custom<F>(id: &'static str, check: F) -> Self
    where
        F: Fn(&dyn Control) -> bool + Send + Sync + 'static,
    {
        Self::Custom {
            id,
            check: Arc::new(check),
        }
    }

    /// The identifier of this validator.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Filled => ids::FILLED,
            Self::Blank => ids::BLANK,
            Self::Equal(_) => ids::EQUAL,
            Self::Custom { id, .. } => *id,
        }
    }

    /// Run the check against a control.
    pub fn check(&self, control: &dyn Control) -> bool {
        match self {
            Self::Filled => control.is_filled(),
            Self::Blank => !control.is_filled(),
            Self::Equal(keys) => control
                .value_text()
                .is_some_and(|value| keys.iter().any(|key| key.as_str() == value)),
            Self::Custom { check, .. } => check(control),
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal(keys) => f.debug_tuple("Equal").field(keys).finish(),
            other => f.write_str(other.id()),
        }
    }
}

/// A rule, or a condition when it carries a branch.
#[derive(Debug, Clone)]
pub struct Rule {
    validator: Validator,
    message: Option<String>,
    branch: Option<Rules>,
}

impl Rule {
    /// The rule's validator.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// The explicit message, if one was given.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether this entry is a condition.
    pub fn is_condition(&self) -> bool {
        self.branch.is_some()
    }

    /// The message reported when this rule fails, with placeholders filled in.
    fn failure_message(&self, control: &dyn Control) -> String {
        let id = self.validator.id();
        let template = self
            .message
            .clone()
            .or_else(|| messages::default_message(id))
            .unwrap_or_else(|| format!("Validation rule {id} failed."));

        let base = control.control_base();
        let label = base.caption().map(|c| c.as_str()).unwrap_or_default();
        let value = control.value_text().unwrap_or_default();
        messages::format_message(&template, label, base.name(), &value)
    }
}

/// The first rule that failed during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Identifier of the failing validator.
    pub validator: &'static str,
    /// The user-facing message.
    pub message: String,
}

/// An ordered list of rules and conditions.
#[derive(Debug, Clone, Default)]
pub struct Rules {
    rules: Vec<Rule>,
    required: bool,
}

impl Rules {
    /// Create an empty rule list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the control required, using the default message.
    pub fn set_required(&mut self, required: bool) -> &mut Self {
        self.apply_required(required, None)
    }

    /// Make the control required with a custom message.
    pub fn set_required_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.apply_required(true, Some(message.into()))
    }

    fn apply_required(&mut self, required: bool, message: Option<String>) -> &mut Self {
        self.rules
            .retain(|rule| rule.is_condition() || !matches!(rule.validator, Validator::Filled));
        if required {
            self.rules.insert(
                0,
                Rule {
                    validator: Validator::Filled,
                    message,
                    branch: None,
                },
            );
        }
        self.required = required;
        self
    }

    /// Whether the control is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Append a rule. `None` uses the default message for the validator.
    pub fn add_rule(&mut self, validator: Validator, message: Option<String>) -> &mut Self {
        self.rules.push(Rule {
            validator,
            message,
            branch: None,
        });
        self
    }

    /// Append a condition and return its branch for adding rules.
    pub fn add_condition(&mut self, validator: Validator) -> &mut Rules {
        self.rules.push(Rule {
            validator,
            message: None,
            branch: Some(Rules::new()),
        });
        // The branch was pushed just above.
        let last = self.rules.len() - 1;
        self.rules[last].branch.get_or_insert_with(Rules::new)
    }

    /// The rules in order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of top-level rules and conditions.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run the rules against a control and return the first failure.
    ///
    /// An optional control without a value only runs its `Filled` rules and
    /// its conditions; the branch of a `Blank` condition always runs in full.
    /// Rules of a disabled control are skipped.
    pub fn validate(&self, control: &dyn Control) -> Option<ValidationFailure> {
        let empty_optional = !self.required && !control.is_filled();
        self.validate_branch(control, empty_optional)
    }

    fn validate_branch(
        &self,
        control: &dyn Control,
        empty_optional: bool,
    ) -> Option<ValidationFailure> {
        let disabled = control.control_base().is_disabled();
        for rule in &self.rules {
            let Some(branch) = &rule.branch else {
                if disabled {
                    continue;
                }
                if empty_optional && !matches!(rule.validator, Validator::Filled) {
                    continue;
                }
                if !rule.validator.check(control) {
                    let failure = ValidationFailure {
                        validator: rule.validator.id(),
                        message: rule.failure_message(control),
                    };
                    tracing::debug!(
                        target: targets::RULES,
                        control = control.control_base().name(),
                        validator = failure.validator,
                        "validation rule failed"
                    );
                    return Some(failure);
                }
                continue;
            };

            if rule.validator.check(control) {
                let branch_optional = match rule.validator {
                    Validator::Blank => false,
                    _ => empty_optional,
                };
                if let Some(failure) = branch.validate_branch(control, branch_optional) {
                    return Some(failure);
                }
            }
        }
        None
    }
}
