//! Visual grouping of controls.
//!
//! A [`ControlGroup`] is a set of controls plus a bag of rendering options.
//! Like a button group, it is a coordinator rather than a container: it
//! refers to controls by [`ControlId`] and never owns them. Adding a control
//! twice has no effect.
//!
//! # Example
//!
//! ```
//! use horizon_forms::control_group::{ControlGroup, GroupItem, group_options};
//! use horizon_forms::controls::SelectBox;
//!
//! let country = SelectBox::new("country");
//! let city = SelectBox::new("city");
//!
//! let mut group = ControlGroup::new();
//! group
//!     .add([GroupItem::control(&country), GroupItem::control(&city)])
//!     .unwrap();
//! group.set_option(group_options::LABEL, Some("Address".into()));
//!
//! assert_eq!(group.len(), 2);
//! ```

use std::any::Any;
use std::collections::HashSet;
use std::sync::Arc;

use horizon_forms_core::logging::targets;
use horizon_forms_core::{Control, ControlId, Error, OptionBag, OptionValue, Result};

/// Well-known group option keys read by renderers.
pub mod group_options {
    /// Caption of the group.
    pub const LABEL: &str = "label";
    /// Whether the group is rendered at all.
    pub const VISUAL: &str = "visual";
    /// Element wrapping the group.
    pub const CONTAINER: &str = "container";
    /// Text rendered below the caption.
    pub const DESCRIPTION: &str = "description";
    /// Render the next group inside this one.
    pub const EMBED_NEXT: &str = "embedNext";
}

/// Something that holds controls, possibly nested.
pub trait Container {
    /// Direct children of the container.
    fn components(&self) -> Vec<Component<'_>>;
}

/// A child of a [`Container`].
#[derive(Clone, Copy)]
pub enum Component<'a> {
    Control(ControlId),
    Container(&'a dyn Container),
}

/// A named container of control ids and nested containers.
#[derive(Debug, Clone, Default)]
pub struct ControlContainer {
    name: String,
    children: Vec<ContainerChild>,
}

#[derive(Debug, Clone)]
enum ContainerChild {
    Control(ControlId),
    Container(ControlContainer),
}

impl ControlContainer {
    /// Create an empty container.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// The container's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a control.
    pub fn add_control(&mut self, control: &dyn Control) -> &mut Self {
        self.children.push(ContainerChild::Control(control.id()));
        self
    }

    /// Add a nested container.
    pub fn add_container(&mut self, container: ControlContainer) -> &mut Self {
        self.children.push(ContainerChild::Container(container));
        self
    }
}

impl Container for ControlContainer {
    fn components(&self) -> Vec<Component<'_>> {
        self.children
            .iter()
            .map(|child| match child {
                ContainerChild::Control(id) => Component::Control(*id),
                ContainerChild::Container(container) => Component::Container(container),
            })
            .collect()
    }
}

/// One argument to [`ControlGroup::add`].
#[derive(Clone)]
pub enum GroupItem<'a> {
    /// A single control.
    Control(ControlId),
    /// Every control in a container, recursively.
    Container(&'a dyn Container),
    /// A collection of controls.
    Controls(Vec<ControlId>),
    /// A value of unknown type, checked when added.
    ///
    /// Accepted values are a [`ControlId`], a `Vec<ControlId>`, a
    /// [`ControlContainer`], and type-erased controls: `Box<dyn Control>`,
    /// `Arc<dyn Control>` or a `Vec` of either. A control of a known type is
    /// added with [`GroupItem::control`] instead.
    Dynamic(&'a dyn Any),
}

impl GroupItem<'_> {
    /// Refer to a control.
    pub fn control(control: &dyn Control) -> Self {
        Self::Control(control.id())
    }
}

impl<'a> From<&'a dyn Control> for GroupItem<'a> {
    fn from(control: &'a dyn Control) -> Self {
        Self::Control(control.id())
    }
}

impl From<ControlId> for GroupItem<'_> {
    fn from(id: ControlId) -> Self {
        Self::Control(id)
    }
}

impl From<Vec<ControlId>> for GroupItem<'_> {
    fn from(ids: Vec<ControlId>) -> Self {
        Self::Controls(ids)
    }
}

impl<'a> From<&'a ControlContainer> for GroupItem<'a> {
    fn from(container: &'a ControlContainer) -> Self {
        Self::Container(container)
    }
}

/// A set of controls rendered together.
#[derive(Debug, Default)]
pub struct ControlGroup {
    controls: HashSet<ControlId>,
    options: OptionBag,
}

impl ControlGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add controls, containers or collections of controls.
    ///
    /// Either every item is added or, if one is not a control, container or
    /// collection, nothing is and an error naming its zero-based position
    /// is returned.
    pub fn add<'a>(&mut self, items: impl IntoIterator<Item = GroupItem<'a>>) -> Result<&mut Self> {
        let mut resolved = Vec::new();
        for (position, item) in items.into_iter().enumerate() {
            resolve_item(item, position, &mut resolved)?;
        }

        let before = self.controls.len();
        self.controls.extend(resolved);
        tracing::debug!(
            target: targets::GROUP,
            added = self.controls.len() - before,
            total = self.controls.len(),
            "controls added to group"
        );
        Ok(self)
    }

    /// The member controls, ordered by id.
    pub fn controls(&self) -> Vec<ControlId> {
        let mut ids: Vec<ControlId> = self.controls.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Whether `id` is a member.
    pub fn contains(&self, id: ControlId) -> bool {
        self.controls.contains(&id)
    }

    /// Number of member controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Set a rendering option; `None` removes it.
    pub fn set_option(&mut self, key: impl Into<String>, value: Option<OptionValue>) -> &mut Self {
        self.options.set(key, value);
        self
    }

    /// A rendering option.
    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// A rendering option, or `default` when unset.
    pub fn option_or(&self, key: &str, default: OptionValue) -> OptionValue {
        self.options.get_or(key, default)
    }

    /// All rendering options.
    pub fn options(&self) -> &OptionBag {
        &self.options
    }
}

fn resolve_item(item: GroupItem<'_>, position: usize, out: &mut Vec<ControlId>) -> Result<()> {
    match item {
        GroupItem::Control(id) => out.push(id),
        GroupItem::Container(container) => collect_container(container, out),
        GroupItem::Controls(ids) => out.extend(ids),
        GroupItem::Dynamic(value) => {
            if let Some(id) = value.downcast_ref::<ControlId>() {
                out.push(*id);
            } else if let Some(ids) = value.downcast_ref::<Vec<ControlId>>() {
                out.extend(ids.iter().copied());
            } else if let Some(container) = value.downcast_ref::<ControlContainer>() {
                collect_container(container, out);
            } else if let Some(control) = value.downcast_ref::<Box<dyn Control>>() {
                out.push(control.id());
            } else if let Some(control) = value.downcast_ref::<Arc<dyn Control>>() {
                out.push(control.id());
            } else if let Some(controls) = value.downcast_ref::<Vec<Box<dyn Control>>>() {
                out.extend(controls.iter().map(|control| control.id()));
            } else if let Some(controls) = value.downcast_ref::<Vec<Arc<dyn Control>>>() {
                out.extend(controls.iter().map(|control| control.id()));
            } else {
                tracing::debug!(target: targets::GROUP, position, "invalid group item");
                return Err(Error::invalid_group_item(position));
            }
        }
    }
    Ok(())
}

fn collect_container(container: &dyn Container, out: &mut Vec<ControlId>) {
    for component in container.components() {
        match component {
            Component::Control(id) => out.push(id),
            Component::Container(nested) => collect_container(nested, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{ChoiceControl, SelectBox};

    #[test]
    fn test_add_is_a_set() {
        let select = SelectBox::new("a");
        let mut group = ControlGroup::new();
        group
            .add([GroupItem::control(&select), GroupItem::control(&select)])
            .unwrap();
        group.add([GroupItem::from(select.id())]).unwrap();

        assert_eq!(group.len(), 1);
        assert!(group.contains(select.id()));
    }

    #[test]
    fn test_add_container_recursively() {
        let a = SelectBox::new("a");
        let b = SelectBox::new("b");
        let c = ChoiceControl::new("c");
        let c_id = c.base().id();

        let mut inner = ControlContainer::new("inner");
        inner.add_control(&b);
        let mut outer = ControlContainer::new("outer");
        outer.add_control(&a).add_container(inner);

        let mut group = ControlGroup::new();
        group
            .add([GroupItem::from(&outer), GroupItem::from(vec![c_id])])
            .unwrap();

        assert_eq!(group.controls(), {
            let mut ids = vec![a.id(), b.id(), c_id];
            ids.sort();
            ids
        });
    }

    #[test]
    fn test_collection_adds_every_control() {
        let x = SelectBox::new("x");
        let y = SelectBox::new("y");

        let mut group = ControlGroup::new();
        group.add([GroupItem::Controls(vec![x.id(), y.id()])]).unwrap();

        assert_eq!(group.len(), 2);
        assert!(group.contains(x.id()));
        assert!(group.contains(y.id()));
    }

    #[test]
    fn test_dynamic_items() {
        let id = SelectBox::new("a").id();
        let ids = vec![SelectBox::new("b").id()];
        let boxed: Box<dyn Control> = Box::new(SelectBox::new("c"));
        let shared: Vec<Arc<dyn Control>> =
            vec![Arc::new(SelectBox::new("d")), Arc::new(SelectBox::new("e"))];

        let mut group = ControlGroup::new();
        group
            .add([
                GroupItem::Dynamic(&id),
                GroupItem::Dynamic(&ids),
                GroupItem::Dynamic(&boxed),
                GroupItem::Dynamic(&shared),
            ])
            .unwrap();

        assert_eq!(group.len(), 5);
        assert!(group.contains(boxed.id()));
        assert!(shared.iter().all(|control| group.contains(control.id())));
    }

    #[test]
    fn test_trait_object_item() {
        let select = SelectBox::new("a");
        let control: &dyn Control = &select;

        let mut group = ControlGroup::new();
        group.add([GroupItem::from(control)]).unwrap();

        assert!(group.contains(select.id()));
    }

    #[test]
    fn test_invalid_item_adds_nothing() {
        let select = SelectBox::new("a");
        let not_a_control = String::from("oops");

        let mut group = ControlGroup::new();
        let err = group
            .add([
                GroupItem::control(&select),
                GroupItem::Dynamic(&not_a_control),
            ])
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Only form controls are allowed, the #1 parameter is invalid."
        );
        assert!(group.is_empty());
    }

    #[test]
    fn test_options() {
        let mut group = ControlGroup::new();
        group.set_option(group_options::LABEL, Some("Personal".into()));
        group.set_option(group_options::VISUAL, Some(true.into()));

        assert_eq!(
            group.option(group_options::LABEL).and_then(|v| v.as_str()),
            Some("Personal")
        );
        assert_eq!(
            group.option_or(group_options::EMBED_NEXT, false.into()).as_bool(),
            Some(false)
        );

        group.set_option(group_options::LABEL, None);
        assert!(group.option(group_options::LABEL).is_none());
        assert_eq!(group.options().len(), 1);
    }
}
