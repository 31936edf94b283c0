//! Core types for Horizon Forms.
//!
//! This crate provides the foundation the form controls are built on:
//!
//! - **Keys and labels**: canonical string keys and opaque display labels
//! - **Item sets**: ordered key → label maps, optionally grouped
//! - **Controls**: the [`Control`] trait and the shared [`ControlBase`] state
//! - **Rules**: validation rules, conditions and the default message registry
//! - **Collaborators**: translation, submitted HTTP data, HTML elements
//! - **Signals**: change notification for control state
//!
//! # Example
//!
//! ```
//! use horizon_forms_core::{ItemSet, Key, Label};
//!
//! let items: ItemSet = [(1, Label::from("One")), (2, Label::from("Two"))]
//!     .into_iter()
//!     .collect();
//!
//! assert!(items.contains_key(Key::from(2).as_str()));
//! assert_eq!(items.get("1"), Some(&Label::from("One")));
//! ```

mod control;
mod error;
pub mod html;
pub mod http_data;
pub mod items;
mod key;
pub mod logging;
pub mod messages;
pub mod options;
pub mod rules;
pub mod signal;
pub mod strings;
pub mod translator;

pub use control::{validate_control, Control, ControlBase, ControlId};
pub use error::{Error, Result};
pub use html::{AttributeValue, Element, Node};
pub use http_data::{HttpDataKind, HttpDataSource, SubmittedData};
pub use items::{ItemSet, OptionNode, OptionTree, OrderedMap};
pub use key::{Key, Label};
pub use options::{OptionBag, OptionValue};
pub use rules::{Rule, Rules, ValidationFailure, Validator};
pub use signal::{ConnectionId, Signal};
pub use translator::{IdentityTranslator, Translator};
