//! Choice controls.
//!
//! - [`ChoiceControl`]: item set, selection and disabled state shared by
//!   controls that pick one key
//! - [`SelectBox`]: a drop-down list with optional groups and prompt

mod choice_control;
mod select_box;

pub use choice_control::{ChoiceControl, Disabled};
pub use select_box::SelectBox;
