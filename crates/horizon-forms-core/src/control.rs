//! The control trait and the state every control shares.
//!
//! Concrete controls embed a [`ControlBase`] and implement [`Control`] by
//! handing it out, the same way widgets embed their base state. The base
//! carries the control's identity, caption, disabled flag, attached errors,
//! validation rules, HTML prototype, user options and translator.
//!
//! # Implementing a control
//!
//! ```ignore
//! use std::any::Any;
//! use horizon_forms_core::{Control, ControlBase, validate_control};
//!
//! struct Checkbox {
//!     base: ControlBase,
//!     checked: bool,
//! }
//!
//! impl Control for Checkbox {
//!     fn control_base(&self) -> &ControlBase { &self.base }
//!     fn control_base_mut(&mut self) -> &mut ControlBase { &mut self.base }
//!     fn is_filled(&self) -> bool { self.checked }
//!     fn value_text(&self) -> Option<String> { self.checked.then(|| "1".into()) }
//!     fn as_any(&self) -> &dyn Any { self }
//!     fn validate(&mut self) -> bool { validate_control(self) }
//! }
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::html::{AttributeValue, Element};
use crate::key::Label;
use crate::logging::targets;
use crate::options::{OptionBag, OptionValue};
use crate::rules::Rules;
use crate::translator::Translator;

/// A process-unique identifier for a control.
///
/// Groups refer to controls by id; they never own them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u64);

impl ControlId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric id.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A form control.
pub trait Control: Any + Send + Sync {
    /// Get a reference to the control's base.
    fn control_base(&self) -> &ControlBase;

    /// Get a mutable reference to the control's base.
    fn control_base_mut(&mut self) -> &mut ControlBase;

    /// Whether the control currently holds a value.
    fn is_filled(&self) -> bool;

    /// The current value as it would be submitted, if any.
    fn value_text(&self) -> Option<String>;

    /// Get this control as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Run the control's rules, replacing its attached errors.
    ///
    /// Returns `true` when no rule failed.
    fn validate(&mut self) -> bool;

    /// The control's id.
    fn id(&self) -> ControlId {
        self.control_base().id()
    }

    /// The control's name.
    fn name(&self) -> &str {
        self.control_base().name()
    }

    /// Whether the whole control is disabled.
    fn is_disabled(&self) -> bool {
        self.control_base().is_disabled()
    }

    /// Errors attached by the last validation.
    fn errors(&self) -> &[String] {
        self.control_base().errors()
    }
}

/// Run a control's rules and attach the first failure to it.
///
/// This is the single validation phase every control goes through. Returns
/// `true` when no rule failed.
pub fn validate_control(control: &mut dyn Control) -> bool {
    control.control_base_mut().clean_errors();
    let failure = control.control_base().rules().validate(&*control);
    match failure {
        Some(failure) => {
            control.control_base_mut().add_error(failure.message);
            false
        }
        None => true,
    }
}

/// State shared by every control.
pub struct ControlBase {
    id: ControlId,
    name: String,
    caption: Option<Label>,
    disabled: bool,
    errors: Vec<String>,
    rules: Rules,
    prototype: Element,
    options: OptionBag,
    translator: Option<Arc<dyn Translator>>,
}

impl ControlBase {
    /// Create the base for a control with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ControlId::next(),
            name: name.into(),
            caption: None,
            disabled: false,
            errors: Vec::new(),
            rules: Rules::new(),
            prototype: Element::new("input"),
            options: OptionBag::new(),
            translator: None,
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// The control's id.
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// The control's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name used for the HTML `name` attribute.
    pub fn html_name(&self) -> &str {
        &self.name
    }

    /// The HTML `id` attribute.
    pub fn html_id(&self) -> String {
        format!("frm-{}", self.name)
    }

    /// The caption shown in the control's label.
    pub fn caption(&self) -> Option<&Label> {
        self.caption.as_ref()
    }

    /// Set the caption.
    pub fn set_caption(&mut self, caption: impl Into<Label>) {
        self.caption = Some(caption.into());
    }

    // =========================================================================
    // Disabled state
    // =========================================================================

    /// Whether the whole control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disable or enable the whole control.
    ///
    /// Controls that hold a value clear it when they are disabled.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            tracing::trace!(target: targets::CONTROL, control = %self.name, disabled, "disabled state changed");
        }
        self.disabled = disabled;
    }

    // =========================================================================
    // Errors
    // =========================================================================

    /// Attach an error message.
    pub fn add_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.errors.contains(&message) {
            self.errors.push(message);
        }
    }

    /// Attached error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Attached error messages joined into one string.
    pub fn error(&self) -> Option<String> {
        (!self.errors.is_empty()).then(|| self.errors.join(" "))
    }

    /// Whether any error is attached.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Remove all attached errors.
    pub fn clean_errors(&mut self) {
        self.errors.clear();
    }

    // =========================================================================
    // Rules
    // =========================================================================

    /// The control's rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Mutable access to the control's rules.
    pub fn rules_mut(&mut self) -> &mut Rules {
        &mut self.rules
    }

    /// Make the control required.
    pub fn set_required(&mut self, required: bool) {
        self.rules.set_required(required);
    }

    /// Whether the control is required.
    pub fn is_required(&self) -> bool {
        self.rules.is_required()
    }

    // =========================================================================
    // HTML
    // =========================================================================

    /// The prototype element holding custom attributes.
    pub fn prototype(&self) -> &Element {
        &self.prototype
    }

    /// Mutable access to the prototype element.
    pub fn prototype_mut(&mut self) -> &mut Element {
        &mut self.prototype
    }

    /// Set a custom HTML attribute on the rendered control.
    pub fn set_html_attribute(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.prototype.set_attribute(name, value);
    }

    /// The rendered control element: the prototype plus the computed
    /// `name`, `id`, `required` and `disabled` attributes.
    pub fn control(&self) -> Element {
        let mut element = self.prototype.clone();
        element.set_attribute("name", self.html_name());
        element.set_attribute("id", self.html_id());
        element.set_attribute("required", self.is_required());
        element.set_attribute("disabled", self.disabled);
        element
    }

    /// The `<label>` element for the control's caption.
    pub fn label(&self) -> Element {
        let mut element = Element::new("label");
        element.set_attribute("for", self.html_id());
        if let Some(caption) = &self.caption {
            element.push((&self.translate(caption)).into());
        }
        element
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Set a user option. `None` removes it.
    pub fn set_option(&mut self, key: impl Into<String>, value: Option<OptionValue>) {
        self.options.set(key, value);
    }

    /// Look up a user option.
    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// All user options.
    pub fn options(&self) -> &OptionBag {
        &self.options
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Set the translator used for captions and labels.
    pub fn set_translator(&mut self, translator: Option<Arc<dyn Translator>>) {
        self.translator = translator;
    }

    /// The translator, if one is set.
    pub fn translator(&self) -> Option<&Arc<dyn Translator>> {
        self.translator.as_ref()
    }

    /// Translate a label, returning it unchanged without a translator.
    pub fn translate(&self, label: &Label) -> Label {
        match &self.translator {
            Some(translator) => translator.translate(label),
            None => label.clone(),
        }
    }
}

impl fmt::Debug for ControlBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlBase")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("caption", &self.caption)
            .field("disabled", &self.disabled)
            .field("errors", &self.errors)
            .field("rules", &self.rules)
            .field("prototype", &self.prototype)
            .field("options", &self.options)
            .field("translator", &self.translator.is_some())
            .finish()
    }
}
