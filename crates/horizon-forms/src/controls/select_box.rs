//! Single-choice drop-down list.
//!
//! A [`SelectBox`] renders its items as a `<select>` element. Items may be
//! grouped: a group becomes an `<optgroup>` whose label is the group key.
//! An optional prompt renders as a first option with an empty value.
//!
//! # Example
//!
//! ```
//! use horizon_forms::controls::SelectBox;
//! use horizon_forms::{ItemSet, Label};
//!
//! let mut select = SelectBox::new("country").with_caption("Country");
//! select.set_items(ItemSet::from_labels(["Czechia", "Slovakia"]), true);
//! select.set_prompt("Choose a country");
//! select.set_value(1).unwrap();
//!
//! assert_eq!(select.selected_item(), Some(&Label::from("Slovakia")));
//! assert!(select.control().to_string().starts_with("<select"));
//! ```

use std::any::Any;
use std::collections::HashSet;

use horizon_forms_core::logging::targets;
use horizon_forms_core::messages::ids;
use horizon_forms_core::{
    Control, ControlBase, Element, HttpDataSource, ItemSet, Key, Label, OptionNode, OptionTree,
    Result, Validator, validate_control,
};

use super::choice_control::{ChoiceControl, Disabled};
use crate::helpers::{self, OptionAttributes, SelectAttributes, SelectEntries, SelectEntry};

/// A drop-down list of items with an optional prompt.
#[derive(Debug)]
pub struct SelectBox {
    choice: ChoiceControl,
    options: OptionTree,
    translate_options: bool,
    prompt: Option<Label>,
    option_attributes: OptionAttributes,
}

impl SelectBox {
    /// Id of the rule that rejects a blank select box with no way to be blank.
    pub const VALID: &'static str = ids::SELECT_BOX_VALID;

    /// Create an empty select box.
    pub fn new(name: impl Into<String>) -> Self {
        let mut choice = ChoiceControl::new(name);
        let base = choice.base_mut();
        base.set_option("type", Some("select".into()));
        base.rules_mut()
            .add_condition(Validator::Blank)
            .add_rule(
                Validator::custom(Self::VALID, |control| {
                    control
                        .as_any()
                        .downcast_ref::<SelectBox>()
                        .is_some_and(SelectBox::is_ok)
                }),
                None,
            );

        Self {
            choice,
            options: OptionTree::new(),
            translate_options: true,
            prompt: None,
            option_attributes: OptionAttributes::new(),
        }
    }

    /// Set the caption using builder pattern.
    pub fn with_caption(mut self, caption: impl Into<Label>) -> Self {
        self.choice.base_mut().set_caption(caption);
        self
    }

    /// Set the items using builder pattern.
    pub fn with_items(mut self, items: impl Into<OptionTree>) -> Self {
        self.set_items(items, true);
        self
    }

    /// Set the prompt using builder pattern.
    pub fn with_prompt(mut self, prompt: impl Into<Label>) -> Self {
        self.set_prompt(prompt);
        self
    }

    /// The embedded choice state.
    pub fn choice(&self) -> &ChoiceControl {
        &self.choice
    }

    /// The shared control state.
    pub fn base(&self) -> &ControlBase {
        self.choice.base()
    }

    /// The shared control state, mutably.
    pub fn base_mut(&mut self) -> &mut ControlBase {
        self.choice.base_mut()
    }

    // =========================================================================
    // Items and prompt
    // =========================================================================

    /// Replace the items, which may contain groups.
    ///
    /// The selectable set is the flattened tree: group members become
    /// top-level keys. With `use_keys` off, items and group members are
    /// re-keyed by their labels.
    pub fn set_items(&mut self, items: impl Into<OptionTree>, use_keys: bool) -> &mut Self {
        let items = items.into();
        self.options = if use_keys {
            items
        } else {
            items.keyed_by_label()
        };
        self.choice.set_items(self.options.flatten(), true);
        self
    }

    /// The items as given, including groups.
    pub fn options(&self) -> &OptionTree {
        &self.options
    }

    /// The flattened selectable items.
    pub fn items(&self) -> &ItemSet {
        self.choice.items()
    }

    /// Set the prompt shown as the first option.
    pub fn set_prompt(&mut self, prompt: impl Into<Label>) -> &mut Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Remove the prompt.
    pub fn remove_prompt(&mut self) -> &mut Self {
        self.prompt = None;
        self
    }

    /// The prompt, if any.
    pub fn prompt(&self) -> Option<&Label> {
        self.prompt.as_ref()
    }

    /// Turn translation of item labels and group labels on or off.
    ///
    /// The prompt is translated either way.
    pub fn set_translate_options(&mut self, translate: bool) -> &mut Self {
        self.translate_options = translate;
        self
    }

    /// Whether item and group labels are translated.
    pub fn translate_options(&self) -> bool {
        self.translate_options
    }

    /// Add per-option attributes.
    ///
    /// Names already configured by an earlier call keep their earlier value.
    pub fn add_option_attributes(&mut self, attributes: OptionAttributes) -> &mut Self {
        self.option_attributes.fill_missing(attributes);
        self
    }

    /// The configured per-option attributes.
    pub fn option_attributes(&self) -> &OptionAttributes {
        &self.option_attributes
    }

    // =========================================================================
    // Value (forwarded)
    // =========================================================================

    /// Select the item with `value`. See [`ChoiceControl::set_value`].
    pub fn set_value(&mut self, value: impl Into<Key>) -> Result<&mut Self> {
        self.choice.set_value(value)?;
        Ok(self)
    }

    /// Clear the selection.
    pub fn clear_value(&mut self) -> &mut Self {
        self.choice.clear_value();
        self
    }

    /// The selected key, if it is part of the item set.
    pub fn value(&self) -> Option<&Key> {
        self.choice.value()
    }

    /// The stored key, whether or not it is part of the item set.
    pub fn raw_value(&self) -> Option<&Key> {
        self.choice.raw_value()
    }

    /// Whether a valid item is selected.
    pub fn is_filled(&self) -> bool {
        self.choice.is_filled()
    }

    /// The label of the selected item.
    pub fn selected_item(&self) -> Option<&Label> {
        self.choice.selected_item()
    }

    /// Disable the control or some of its items. See [`ChoiceControl::set_disabled`].
    pub fn set_disabled(&mut self, disabled: impl Into<Disabled>) -> &mut Self {
        self.choice.set_disabled(disabled);
        self
    }

    /// The individually disabled keys, if any.
    pub fn disabled_items(&self) -> Option<&HashSet<Key>> {
        self.choice.disabled_items()
    }

    /// Turn checking of set values against the item set on or off.
    pub fn set_check_allowed_values(&mut self, check: bool) -> &mut Self {
        self.choice.set_check_allowed_values(check);
        self
    }

    /// Load the submitted value. See [`ChoiceControl::load_http_data`].
    pub fn load_http_data(&mut self, source: &dyn HttpDataSource) {
        self.choice.load_http_data(source);
    }

    // =========================================================================
    // Rendering and validity
    // =========================================================================

    /// Whether the control can legitimately be left blank.
    ///
    /// True when the control is disabled, has a prompt, has a selection,
    /// has no items, or shows more than one row.
    pub fn is_ok(&self) -> bool {
        self.choice.is_disabled()
            || self.prompt.is_some()
            || self.choice.value().is_some()
            || self.options.is_empty()
            || self.size() > 1
    }

    fn size(&self) -> i64 {
        self.base()
            .prototype()
            .attribute("size")
            .and_then(|size| size.as_int())
            .unwrap_or(1)
    }

    /// Build the `<select>` element.
    pub fn control(&self) -> Element {
        let base = self.base();
        let translate_item = |label: &Label| {
            if self.translate_options {
                base.translate(label)
            } else {
                label.clone()
            }
        };

        let mut entries = SelectEntries::new();
        if let Some(prompt) = &self.prompt {
            entries.insert(Key::empty(), SelectEntry::Option(base.translate(prompt)));
        }
        for (key, node) in self.options.iter() {
            match node {
                OptionNode::Item(label) => {
                    entries.insert(key, SelectEntry::Option(translate_item(label)));
                }
                OptionNode::Group(items) => {
                    let group_key = Key::from(&translate_item(&Label::from(key.as_str())));
                    let members = items
                        .iter()
                        .map(|(k, label)| (k, translate_item(label)))
                        .collect::<ItemSet>();
                    entries.insert(group_key, SelectEntry::Group(members));
                }
            }
        }

        let selected: Vec<Key> = self.choice.raw_value().cloned().into_iter().collect();
        let mut element = helpers::create_select_box(
            &entries,
            &SelectAttributes {
                selected: &selected,
                disabled: self.choice.disabled_items(),
                options: &self.option_attributes,
            },
        );
        element.merge_attributes(base.control().attributes());
        tracing::trace!(
            target: targets::SELECT_BOX,
            control = base.name(),
            entries = entries.len(),
            "select box rendered"
        );
        element
    }

    /// Build the `<label>` element.
    pub fn label(&self) -> Element {
        self.base().label()
    }
}

impl Control for SelectBox {
    fn control_base(&self) -> &ControlBase {
        self.choice.base()
    }

    fn control_base_mut(&mut self) -> &mut ControlBase {
        self.choice.base_mut()
    }

    fn is_filled(&self) -> bool {
        self.choice.is_filled()
    }

    fn value_text(&self) -> Option<String> {
        self.choice.value_text()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn validate(&mut self) -> bool {
        validate_control(self)
    }
}

static_assertions::assert_impl_all!(SelectBox: Send, Sync);
