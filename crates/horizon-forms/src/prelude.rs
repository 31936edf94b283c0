//! Prelude module for Horizon Forms.
//!
//! ```ignore
//! use horizon_forms::prelude::*;
//! ```

// ============================================================================
// Controls
// ============================================================================

pub use crate::controls::{ChoiceControl, Disabled, SelectBox};
pub use crate::{Control, ControlBase, ControlId};

// ============================================================================
// Items
// ============================================================================

pub use crate::{ItemSet, Key, Label, OptionNode, OptionTree};

// ============================================================================
// Grouping
// ============================================================================

pub use crate::control_group::{ControlContainer, ControlGroup, GroupItem, group_options};

// ============================================================================
// Collaborators
// ============================================================================

pub use crate::helpers::{OptionAttribute, OptionAttributes};
pub use crate::{Element, HttpDataSource, SubmittedData, Translator};
pub use crate::{Error, Rules, Validator};
