//! Error types for form controls.
//!
//! Both variants are invalid-argument errors: they report a caller mistake
//! synchronously and are never recovered from inside the library. Failed
//! validation rules are not errors; they are attached to the control as
//! messages (see [`ControlBase::errors`](crate::ControlBase::errors)).

use crate::key::Key;
use crate::strings;

/// Result type alias for form-control operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by form-control operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A selection value outside the allowed item set.
    #[error("Value '{value}' is out of allowed set [{allowed}] in field '{field}'.")]
    ValueOutOfRange {
        value: String,
        allowed: String,
        field: String,
    },

    /// An item passed to a control group that is not a control, container
    /// or collection of controls.
    #[error("Only form controls are allowed, the #{position} parameter is invalid.")]
    InvalidGroupItem { position: usize },
}

impl Error {
    /// Maximum length of the allowed-set listing in [`Error::ValueOutOfRange`].
    pub const ALLOWED_SET_MAX_LEN: usize = 70;

    /// Create an out-of-range error listing the allowed keys.
    pub fn value_out_of_range<'a>(
        value: &Key,
        allowed: impl IntoIterator<Item = &'a Key>,
        field: impl Into<String>,
    ) -> Self {
        let listing = allowed
            .into_iter()
            .map(Key::export)
            .collect::<Vec<_>>()
            .join(", ");
        Self::ValueOutOfRange {
            value: value.to_string(),
            allowed: strings::truncate(&listing, Self::ALLOWED_SET_MAX_LEN, "..."),
            field: field.into(),
        }
    }

    /// Create an invalid group item error.
    pub fn invalid_group_item(position: usize) -> Self {
        Self::InvalidGroupItem { position }
    }

    /// Whether the error reports an invalid argument. Always true today.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::ValueOutOfRange { .. } | Self::InvalidGroupItem { .. }
        )
    }
}
