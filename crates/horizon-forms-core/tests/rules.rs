//! Integration tests for rules, conditions and the validation phase.

use std::any::Any;

use horizon_forms_core::messages::{self, ids};
use horizon_forms_core::{Control, ControlBase, Key, Validator, validate_control};

/// A bare text control used to exercise the rule engine.
struct TextInput {
    base: ControlBase,
    value: String,
}

impl TextInput {
    fn new(name: &str) -> Self {
        Self {
            base: ControlBase::new(name),
            value: String::new(),
        }
    }

    fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_owned();
        self
    }
}

impl Control for TextInput {
    fn control_base(&self) -> &ControlBase {
        &self.base
    }

    fn control_base_mut(&mut self) -> &mut ControlBase {
        &mut self.base
    }

    fn is_filled(&self) -> bool {
        !self.value.is_empty()
    }

    fn value_text(&self) -> Option<String> {
        self.is_filled().then(|| self.value.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn validate(&mut self) -> bool {
        validate_control(self)
    }
}

#[test]
fn test_required_control_reports_default_message() {
    let mut input = TextInput::new("email");
    input.control_base_mut().set_required(true);

    assert!(!input.validate());
    assert_eq!(
        input.errors(),
        [messages::default_message(ids::FILLED).unwrap()]
    );

    input.value = "a@b.c".into();
    assert!(input.validate());
    assert!(input.errors().is_empty());
}

#[test]
fn test_required_with_custom_message() {
    let mut input = TextInput::new("email");
    input
        .control_base_mut()
        .rules_mut()
        .set_required_message("%name is mandatory");

    assert!(!input.validate());
    assert_eq!(input.errors(), ["email is mandatory"]);
}

#[test]
fn test_unrequiring_removes_filled_rule() {
    let mut input = TextInput::new("email");
    input.control_base_mut().set_required(true);
    input.control_base_mut().set_required(false);

    assert!(input.control_base().rules().is_empty());
    assert!(input.validate());
}

#[test]
fn test_optional_blank_control_skips_rules() {
    let mut input = TextInput::new("color");
    input.control_base_mut().rules_mut().add_rule(
        Validator::Equal(vec![Key::from("red")]),
        Some("Only %value is not red.".into()),
    );

    assert!(input.validate());

    input.value = "blue".into();
    assert!(!input.validate());
    assert_eq!(input.errors(), ["Only blue is not red."]);
}

#[test]
fn test_condition_runs_branch_only_when_met() {
    let mut input = TextInput::new("code").with_value("abc");
    input
        .control_base_mut()
        .rules_mut()
        .add_condition(Validator::Equal(vec![Key::from("abc")]))
        .add_rule(
            Validator::custom(":never", |_| false),
            Some("%label rejected".into()),
        );
    input.control_base_mut().set_caption("Code");

    assert!(!input.validate());
    assert_eq!(input.errors(), ["Code rejected"]);

    input.value = "xyz".into();
    assert!(input.validate());
}

#[test]
fn test_blank_condition_branch_runs_for_empty_optional_control() {
    let mut input = TextInput::new("choice");
    input
        .control_base_mut()
        .rules_mut()
        .add_condition(Validator::Blank)
        .add_rule(Validator::custom(":neverBlank", |_| false), None);

    assert!(!input.validate());
    assert_eq!(input.errors(), ["Validation rule :neverBlank failed."]);
}

#[test]
fn test_first_failure_stops_validation() {
    let mut input = TextInput::new("n").with_value("1");
    input
        .control_base_mut()
        .rules_mut()
        .add_rule(Validator::custom(":a", |_| false), Some("first".into()))
        .add_rule(Validator::custom(":b", |_| false), Some("second".into()));

    assert!(!input.validate());
    assert_eq!(input.errors(), ["first"]);
}

#[test]
fn test_disabled_control_skips_rules() {
    let mut input = TextInput::new("x");
    input.control_base_mut().set_required(true);
    input.control_base_mut().set_disabled(true);

    assert!(input.validate());
}

#[test]
fn test_custom_validator_sees_control() {
    let mut input = TextInput::new("x").with_value("hello");
    input.control_base_mut().rules_mut().add_rule(
        Validator::custom(":short", |control| {
            control
                .as_any()
                .downcast_ref::<TextInput>()
                .is_some_and(|input| input.value.len() <= 3)
        }),
        Some("Too long.".into()),
    );

    assert!(!input.validate());
    assert_eq!(input.errors(), ["Too long."]);
}
