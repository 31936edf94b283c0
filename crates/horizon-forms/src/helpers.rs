//! Element builders shared by controls.
//!
//! [`create_select_box`] turns an ordered list of options and option groups
//! into a `<select>` element. Per-option attributes come from an
//! [`OptionAttributes`] set plus the control's computed state: the selected
//! keys and the disabled keys. Computed `selected`/`disabled` attributes never
//! override ones set explicitly.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use horizon_forms_core::{AttributeValue, Element, ItemSet, Key, Label, Node, OrderedMap};

/// How one per-option attribute gets its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionAttribute {
    /// The same value on every option.
    Static(AttributeValue),
    /// A value per option key; options without an entry don't get the attribute.
    PerKey(HashMap<Key, AttributeValue>),
}

impl From<AttributeValue> for OptionAttribute {
    fn from(value: AttributeValue) -> Self {
        Self::Static(value)
    }
}

impl From<&str> for OptionAttribute {
    fn from(value: &str) -> Self {
        Self::Static(value.into())
    }
}

impl From<String> for OptionAttribute {
    fn from(value: String) -> Self {
        Self::Static(value.into())
    }
}

impl From<bool> for OptionAttribute {
    fn from(value: bool) -> Self {
        Self::Static(value.into())
    }
}

impl From<HashMap<Key, AttributeValue>> for OptionAttribute {
    fn from(values: HashMap<Key, AttributeValue>) -> Self {
        Self::PerKey(values)
    }
}

/// Ordered per-option attribute settings, keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionAttributes {
    entries: IndexMap<String, OptionAttribute>,
}

impl OptionAttributes {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing an existing setting.
    pub fn set(&mut self, name: impl Into<String>, attribute: impl Into<OptionAttribute>) {
        self.entries.insert(name.into(), attribute.into());
    }

    /// Look up an attribute setting.
    pub fn get(&self, name: &str) -> Option<&OptionAttribute> {
        self.entries.get(name)
    }

    /// Add the settings from `other` whose names are not present yet.
    pub fn fill_missing(&mut self, other: OptionAttributes) {
        for (name, attribute) in other.entries {
            self.entries.entry(name).or_insert(attribute);
        }
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionAttribute)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    /// Number of settings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The attributes these settings give the option with `key`.
    pub fn resolve(&self, key: &Key) -> Vec<(String, AttributeValue)> {
        self.entries
            .iter()
            .filter_map(|(name, attribute)| match attribute {
                OptionAttribute::Static(value) => Some((name.clone(), value.clone())),
                OptionAttribute::PerKey(values) => {
                    values.get(key).map(|value| (name.clone(), value.clone()))
                }
            })
            .collect()
    }
}

impl<N: Into<String>, A: Into<OptionAttribute>> FromIterator<(N, A)> for OptionAttributes {
    fn from_iter<I: IntoIterator<Item = (N, A)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, attribute) in iter {
            attributes.set(name, attribute);
        }
        attributes
    }
}

/// One entry of a select box, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEntry {
    /// An `<option>` with its label.
    Option(Label),
    /// An `<optgroup>`; the entry key is the group label.
    Group(ItemSet),
}

/// Entries of a select box keyed by option value or group label.
pub type SelectEntries = OrderedMap<SelectEntry>;

/// Attribute state passed to [`create_select_box`].
#[derive(Debug, Clone, Copy)]
pub struct SelectAttributes<'a> {
    /// Keys whose options get `selected`.
    pub selected: &'a [Key],
    /// Keys whose options get `disabled`.
    pub disabled: Option<&'a HashSet<Key>>,
    /// Explicit per-option attributes.
    pub options: &'a OptionAttributes,
}

/// Build a `<select>` element from entries and attribute state.
pub fn create_select_box(entries: &SelectEntries, attributes: &SelectAttributes<'_>) -> Element {
    let mut select = Element::new("select");
    for (key, entry) in entries.iter() {
        match entry {
            SelectEntry::Option(label) => {
                select.push_element(create_option(key, label, attributes));
            }
            SelectEntry::Group(items) => {
                let mut group = Element::new("optgroup");
                group.set_attribute("label", key.as_str());
                for (item_key, label) in items.iter() {
                    group.push_element(create_option(item_key, label, attributes));
                }
                select.push_element(group);
            }
        }
    }
    select
}

fn create_option(key: &Key, label: &Label, attributes: &SelectAttributes<'_>) -> Element {
    let mut option = Element::new("option");
    option.set_attribute("value", key.as_str());
    for (name, value) in attributes.options.resolve(key) {
        if name != "value" {
            option.set_attribute(name, value);
        }
    }

    if !option.has_attribute("selected") && attributes.selected.contains(key) {
        option.set_attribute("selected", true);
    }
    if !option.has_attribute("disabled")
        && attributes
            .disabled
            .is_some_and(|disabled| disabled.contains(key.as_str()))
    {
        option.set_attribute("disabled", true);
    }

    option.push(Node::from(label));
    option
}
