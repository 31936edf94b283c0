//! Horizon Forms - form controls for picking from item sets.
//!
//! This is the main crate; it re-exports everything from
//! `horizon-forms-core` and adds the controls built on it.
//!
//! # Example
//!
//! ```
//! use horizon_forms::prelude::*;
//!
//! let mut tree = OptionTree::new();
//! tree.insert("none", OptionNode::from("No preference"));
//! tree.insert(
//!     "Fruit",
//!     OptionNode::Group(ItemSet::from_labels(["Apple", "Pear"])),
//! );
//!
//! let mut select = SelectBox::new("snack").with_items(tree);
//! select.load_http_data(&SubmittedData::new().with("snack", "1"));
//!
//! assert_eq!(select.selected_item(), Some(&Label::from("Pear")));
//! assert!(select.validate());
//! ```

pub use horizon_forms_core::*;

pub mod control_group;
pub mod controls;
pub mod helpers;
pub mod prelude;
