//! Ordered item sets and grouped option trees.
//!
//! - [`OrderedMap`]: insertion-ordered map keyed by [`Key`], backed by [`IndexMap`]
//! - [`ItemSet`]: the flat key → label domain of a choice control
//! - [`OptionTree`]: items and named groups of items, as shown by a select box
//!
//! Inserting a key that already exists replaces its value but keeps the
//! position of the first insertion.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::key::{Key, Label};

/// An insertion-ordered map from [`Key`] to `V`.
///
/// Keys are converted with `Into<Key>` on insertion and looked up by their
/// canonical string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderedMap<V>(IndexMap<Key, V>);

impl<V> OrderedMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert a value, returning the previous value for the key.
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<Key>, value: V) -> Option<V> {
        self.0.insert(key.into(), value)
    }

    /// Remove a key, returning its value. Later entries keep their order.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.0.shift_remove(key)
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.get(key)
    }

    /// Whether the map holds the key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, V> {
        self.0.iter()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, V> {
        self.0.keys()
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, V> {
        self.0.values()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// The underlying index map.
    pub fn as_index_map(&self) -> &IndexMap<Key, V> {
        &self.0
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<IndexMap<Key, V>> for OrderedMap<V> {
    fn from(map: IndexMap<Key, V>) -> Self {
        Self(map)
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<Key>, V> Extend<(K, V)> for OrderedMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(key, value)| (key.into(), value)));
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (Key, V);
    type IntoIter = indexmap::map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map or a sequence")
    }

    fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        IndexMap::deserialize(de::value::MapAccessDeserializer::new(access)).map(OrderedMap)
    }

    // A plain list is keyed by position.
    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        while let Some(value) = access.next_element::<V>()? {
            map.insert(map.len(), value);
        }
        Ok(map)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OrderedMapVisitor(PhantomData))
    }
}

/// The flat key → label domain of a choice control.
pub type ItemSet = OrderedMap<Label>;

impl ItemSet {
    /// Build an item set from a list of labels, keyed by position.
    pub fn from_labels<L: Into<Label>>(labels: impl IntoIterator<Item = L>) -> Self {
        labels
            .into_iter()
            .enumerate()
            .map(|(position, label)| (position, label.into()))
            .collect()
    }

    /// Re-key every item by its stringified label.
    ///
    /// Labels that stringify identically collapse into one entry, the last
    /// label winning.
    pub fn keyed_by_label(&self) -> Self {
        self.values().map(|label| (Key::from(label), label.clone())).collect()
    }
}

/// One top-level entry of an [`OptionTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionNode {
    /// A selectable item with its label.
    Item(Label),
    /// A named group of items (an `<optgroup>`). The entry's key is the group label.
    Group(ItemSet),
}

impl OptionNode {
    /// Whether this node is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }
}

impl From<Label> for OptionNode {
    fn from(label: Label) -> Self {
        Self::Item(label)
    }
}

impl From<&str> for OptionNode {
    fn from(label: &str) -> Self {
        Self::Item(label.into())
    }
}

impl From<ItemSet> for OptionNode {
    fn from(items: ItemSet) -> Self {
        Self::Group(items)
    }
}

impl Serialize for OptionNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Item(label) => label.serialize(serializer),
            Self::Group(items) => items.serialize(serializer),
        }
    }
}

struct OptionNodeVisitor;

impl<'de> Visitor<'de> for OptionNodeVisitor {
    type Value = OptionNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a label, a map of items or a list of labels")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<OptionNode, E> {
        Ok(OptionNode::Item(Label::from(v)))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<OptionNode, E> {
        Ok(OptionNode::Item(Label::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<OptionNode, E> {
        Ok(OptionNode::Item(Label::Text(v.to_string())))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<OptionNode, E> {
        Ok(OptionNode::Item(Label::Text(v.to_string())))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<OptionNode, E> {
        Ok(OptionNode::Item(Label::Text(v.to_string())))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<OptionNode, E> {
        Ok(OptionNode::Item(Label::Text(Key::from(v).into_string())))
    }

    fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<OptionNode, A::Error> {
        OrderedMapVisitor(PhantomData).visit_map(access).map(OptionNode::Group)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, access: A) -> Result<OptionNode, A::Error> {
        OrderedMapVisitor(PhantomData).visit_seq(access).map(OptionNode::Group)
    }
}

impl<'de> Deserialize<'de> for OptionNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OptionNodeVisitor)
    }
}

/// Items and groups of items in display order.
pub type OptionTree = OrderedMap<OptionNode>;

impl OptionTree {
    /// Reduce the tree to its leaf items.
    ///
    /// Group structure is dropped. A key that appears more than once keeps
    /// its first position and its last label.
    pub fn flatten(&self) -> ItemSet {
        let mut flat = ItemSet::new();
        for (key, node) in self.iter() {
            match node {
                OptionNode::Item(label) => {
                    flat.insert(key, label.clone());
                }
                OptionNode::Group(items) => {
                    flat.extend(items.iter().map(|(k, l)| (k, l.clone())));
                }
            }
        }
        flat
    }

    /// Re-key items (including group members) by their stringified labels.
    ///
    /// Group labels are left untouched.
    pub fn keyed_by_label(&self) -> Self {
        let mut tree = OptionTree::new();
        for (key, node) in self.iter() {
            match node {
                OptionNode::Item(label) => {
                    tree.insert(Key::from(label), OptionNode::Item(label.clone()));
                }
                OptionNode::Group(items) => {
                    tree.insert(key, OptionNode::Group(items.keyed_by_label()));
                }
            }
        }
        tree
    }

    /// Whether any entry is a group.
    pub fn has_groups(&self) -> bool {
        self.values().any(OptionNode::is_group)
    }
}

impl From<ItemSet> for OptionTree {
    fn from(items: ItemSet) -> Self {
        items
            .into_iter()
            .map(|(key, label)| (key, OptionNode::Item(label)))
            .collect()
    }
}
