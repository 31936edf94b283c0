//! Grouping controls whose types live outside this crate.

use std::any::Any;
use std::sync::Arc;

use horizon_forms::prelude::*;
use horizon_forms::validate_control;

/// A minimal text control implemented by a downstream crate.
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
fn test_custom_control_joins_group() {
    let name = TextInput::new("name");
    let country = SelectBox::new("country");

    let mut group = ControlGroup::new();
    group
        .add([GroupItem::control(&name), GroupItem::control(&country)])
        .unwrap();

    assert_eq!(group.len(), 2);
    assert!(group.contains(name.id()));
}

#[test]
fn test_custom_control_in_container() {
    let street = TextInput::new("street");
    let city = TextInput::new("city");

    let mut address = ControlContainer::new("address");
    address.add_control(&street).add_control(&city);

    let mut group = ControlGroup::new();
    group.add([GroupItem::from(&address)]).unwrap();

    assert!(group.contains(street.id()));
    assert!(group.contains(city.id()));
}

#[test]
fn test_type_erased_custom_controls() {
    let boxed: Box<dyn Control> = Box::new(TextInput::new("email"));
    let shared: Arc<dyn Control> = Arc::new(TextInput::new("phone"));
    let many: Vec<Box<dyn Control>> = vec![
        Box::new(TextInput::new("first")),
        Box::new(SelectBox::new("title")),
    ];

    let mut group = ControlGroup::new();
    group
        .add([
            GroupItem::Dynamic(&boxed),
            GroupItem::Dynamic(&shared),
            GroupItem::Dynamic(&many),
        ])
        .unwrap();

    assert_eq!(group.len(), 4);
    assert!(group.contains(boxed.id()));
    assert!(group.contains(shared.id()));
    assert!(many.iter().all(|control| group.contains(control.id())));
}

#[test]
fn test_non_control_value_is_rejected() {
    let input = TextInput::new("notes");
    let label = Label::from("Notes");

    let mut group = ControlGroup::new();
    let err = group
        .add([GroupItem::control(&input), GroupItem::Dynamic(&label)])
        .unwrap_err();

    assert!(err.is_invalid_argument());
    assert!(group.is_empty());
}
