//! Shared state and behavior for controls that pick from a set of items.
//!
//! [`ChoiceControl`] owns the item set, the selected key and the disabled
//! state. Concrete controls such as [`SelectBox`](super::SelectBox) embed it
//! and forward to it, adding their own rendering. It does not implement
//! [`Control`](horizon_forms_core::Control) itself: rules registered on its
//! base only run through the control that embeds it.
//!
//! Values are always compared by their canonical [`Key`] form, so `1`, `"1"`
//! and `true` all select the same item.

use std::collections::HashSet;

use horizon_forms_core::logging::targets;
use horizon_forms_core::{
    ControlBase, Error, HttpDataKind, HttpDataSource, ItemSet, Key, Label, Result, Signal,
};

/// What to disable on a choice control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disabled {
    /// Enable or disable the whole control.
    Control(bool),
    /// Keep the control enabled but disable individual items.
    Items(HashSet<Key>),
}

impl From<bool> for Disabled {
    fn from(disabled: bool) -> Self {
        Self::Control(disabled)
    }
}

impl From<HashSet<Key>> for Disabled {
    fn from(keys: HashSet<Key>) -> Self {
        Self::Items(keys)
    }
}

impl<K: Into<Key>> From<Vec<K>> for Disabled {
    fn from(keys: Vec<K>) -> Self {
        Self::Items(keys.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Key>, const N: usize> From<[K; N]> for Disabled {
    fn from(keys: [K; N]) -> Self {
        Self::Items(keys.into_iter().map(Into::into).collect())
    }
}

/// A control whose value is one key of an item set.
pub struct ChoiceControl {
    base: ControlBase,
    items: ItemSet,
    value: Option<Key>,
    disabled_items: Option<HashSet<Key>>,
    check_allowed_values: bool,

    /// Signal emitted when the stored value changes.
    pub value_changed: Signal<Option<Key>>,
}

impl ChoiceControl {
    /// Create a choice control with no items.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: ControlBase::new(name),
            items: ItemSet::new(),
            value: None,
            disabled_items: None,
            check_allowed_values: true,
            value_changed: Signal::new(),
        }
    }

    /// Set the caption using builder pattern.
    pub fn with_caption(mut self, caption: impl Into<Label>) -> Self {
        self.base.set_caption(caption);
        self
    }

    /// Set the items using builder pattern.
    pub fn with_items(mut self, items: impl Into<ItemSet>) -> Self {
        self.set_items(items, true);
        self
    }

    /// The shared control state.
    pub fn base(&self) -> &ControlBase {
        &self.base
    }

    /// The shared control state, mutably.
    pub fn base_mut(&mut self) -> &mut ControlBase {
        &mut self.base
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Replace the item set.
    ///
    /// With `use_keys` off, every item is re-keyed by its own label. The
    /// stored value is kept even if it is no longer in the set; [`value`]
    /// then reports nothing.
    ///
    /// [`value`]: Self::value
    pub fn set_items(&mut self, items: impl Into<ItemSet>, use_keys: bool) -> &mut Self {
        let items = items.into();
        self.items = if use_keys {
            items
        } else {
            items.keyed_by_label()
        };
        tracing::trace!(
            target: targets::CHOICE,
            control = self.base.name(),
            count = self.items.len(),
            "items replaced"
        );
        self
    }

    /// The current item set.
    pub fn items(&self) -> &ItemSet {
        &self.items
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// Select the item with `value`.
    ///
    /// The value is canonicalized to a [`Key`] first. When allowed-value
    /// checking is on, a key outside the item set is rejected and the
    /// stored value is left untouched.
    pub fn set_value(&mut self, value: impl Into<Key>) -> Result<&mut Self> {
        let key = value.into();
        if self.check_allowed_values && !self.items.contains_key(key.as_str()) {
            let error = Error::value_out_of_range(&key, self.items.keys(), self.base.name());
            tracing::debug!(
                target: targets::CHOICE,
                control = self.base.name(),
                value = %key,
                "value rejected"
            );
            return Err(error);
        }
        self.store_value(Some(key));
        Ok(self)
    }

    /// Clear the selection.
    pub fn clear_value(&mut self) -> &mut Self {
        self.store_value(None);
        self
    }

    /// The selected key, if it is part of the current item set.
    pub fn value(&self) -> Option<&Key> {
        self.value
            .as_ref()
            .filter(|key| self.items.contains_key(key.as_str()))
    }

    /// The stored key, whether or not it is part of the item set.
    pub fn raw_value(&self) -> Option<&Key> {
        self.value.as_ref()
    }

    /// Whether a valid item is selected.
    pub fn is_filled(&self) -> bool {
        self.value().is_some()
    }

    /// The stored key as submitted text, for rule messages and comparisons.
    pub fn value_text(&self) -> Option<String> {
        self.value.as_ref().map(|key| key.as_str().to_owned())
    }

    /// The label of the selected item.
    pub fn selected_item(&self) -> Option<&Label> {
        self.value().and_then(|key| self.items.get(key.as_str()))
    }

    /// Turn checking of set values against the item set on or off.
    pub fn set_check_allowed_values(&mut self, check: bool) -> &mut Self {
        self.check_allowed_values = check;
        self
    }

    /// Whether set values are checked against the item set.
    pub fn check_allowed_values(&self) -> bool {
        self.check_allowed_values
    }

    fn store_value(&mut self, value: Option<Key>) {
        if self.value == value {
            return;
        }
        self.value = value;
        self.value_changed.emit(self.value.clone());
    }

    // =========================================================================
    // Disabled state
    // =========================================================================

    /// Disable the whole control, or only some of its items.
    ///
    /// Disabling the whole control clears its value and any per-item
    /// disabled set. Disabling items keeps the control enabled and clears
    /// the selection if it names a disabled item.
    pub fn set_disabled(&mut self, disabled: impl Into<Disabled>) -> &mut Self {
        match disabled.into() {
            Disabled::Control(disabled) => {
                self.base.set_disabled(disabled);
                self.disabled_items = None;
                if disabled {
                    self.store_value(None);
                }
            }
            Disabled::Items(keys) => {
                self.base.set_disabled(false);
                let selected_disabled = self
                    .value
                    .as_ref()
                    .is_some_and(|key| keys.contains(key.as_str()));
                tracing::trace!(
                    target: targets::CHOICE,
                    control = self.base.name(),
                    count = keys.len(),
                    "items disabled"
                );
                self.disabled_items = Some(keys);
                if selected_disabled {
                    self.store_value(None);
                }
            }
        }
        self
    }

    /// Whether the whole control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.base.is_disabled()
    }

    /// The individually disabled keys, if any.
    pub fn disabled_items(&self) -> Option<&HashSet<Key>> {
        self.disabled_items.as_ref()
    }

    /// Whether the item with `key` is disabled, either by itself or because
    /// the whole control is.
    pub fn is_item_disabled(&self, key: &str) -> bool {
        self.base.is_disabled()
            || self
                .disabled_items
                .as_ref()
                .is_some_and(|keys| keys.contains(key))
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Load the submitted value for this control.
    ///
    /// A disabled control ignores submitted data. A submitted key naming a
    /// disabled item is treated as no selection. Other keys are stored
    /// without checking them against the item set; validation reports them.
    pub fn load_http_data(&mut self, source: &dyn HttpDataSource) {
        if self.base.is_disabled() {
            tracing::trace!(
                target: targets::CHOICE,
                control = self.base.name(),
                "disabled, submitted data ignored"
            );
            return;
        }

        let value = source
            .http_data(HttpDataKind::Text, self.base.html_name())
            .map(Key::from)
            .filter(|key| {
                let disabled = self.is_item_disabled(key.as_str());
                if disabled {
                    tracing::debug!(
                        target: targets::CHOICE,
                        control = self.base.name(),
                        value = %key,
                        "submitted value names a disabled item"
                    );
                }
                !disabled
            });
        self.store_value(value);
    }
}

impl std::fmt::Debug for ChoiceControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChoiceControl")
            .field("base", &self.base)
            .field("items", &self.items)
            .field("value", &self.value)
            .field("disabled_items", &self.disabled_items)
            .field("check_allowed_values", &self.check_allowed_values)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(ChoiceControl: Send, Sync);
static_assertions::assert_not_impl_any!(ChoiceControl: horizon_forms_core::Control);
