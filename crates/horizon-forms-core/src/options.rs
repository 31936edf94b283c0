//! User-specific options attached to controls and groups.
//!
//! Options are metadata for renderers. The library stores them but does not
//! interpret them, with the exception of the `type` option a control sets on
//! itself.

use std::collections::HashMap;

use crate::html::Element;
use crate::key::Label;

/// The value of a user option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A flag.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// Plain text.
    Text(String),
    /// A label (text or markup).
    Label(Label),
    /// A prototype element, e.g. a container to render into.
    Element(Element),
}

impl OptionValue {
    /// The value as text, if it is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Label(label) => Some(label.as_str()),
            _ => None,
        }
    }

    /// The value as a flag, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Label> for OptionValue {
    fn from(value: Label) -> Self {
        Self::Label(value)
    }
}

impl From<Element> for OptionValue {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

/// A key → value bag of user options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionBag {
    values: HashMap<String, OptionValue>,
}

impl OptionBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option. `None` removes it.
    pub fn set(&mut self, key: impl Into<String>, value: Option<OptionValue>) {
        let key = key.into();
        match value {
            Some(value) => {
                self.values.insert(key, value);
            }
            None => {
                self.values.remove(&key);
            }
        }
    }

    /// Look up an option.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    /// Look up an option, falling back to `default`.
    pub fn get_or(&self, key: &str, default: OptionValue) -> OptionValue {
        self.values.get(key).cloned().unwrap_or(default)
    }

    /// All options.
    pub fn all(&self) -> &HashMap<String, OptionValue> {
        &self.values
    }

    /// Number of options set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no option is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
