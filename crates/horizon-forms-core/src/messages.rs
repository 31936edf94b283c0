//! Process-wide default messages for validation rules.
//!
//! Each validator has an identifier (see [`ids`]). A rule registered without
//! its own message reports the registry's message for that identifier at the
//! time it fails, so overriding a default here affects controls that already
//! exist.
//!
//! Messages may contain the placeholders `%label`, `%name` and `%value`, which
//! are replaced with the control's caption, name and submitted value.

use std::collections::HashMap;
use std::sync::LazyLock;

use parking_lot::RwLock;

/// Validator identifiers.
pub mod ids {
    /// The control must have a value.
    pub const FILLED: &str = ":filled";
    /// The control must not have a value.
    pub const BLANK: &str = ":blank";
    /// The control value must equal one of the given keys.
    pub const EQUAL: &str = ":equal";
    /// A select box must not silently default to its first option.
    pub const SELECT_BOX_VALID: &str = ":selectBoxValid";
}

static MESSAGES: LazyLock<RwLock<HashMap<String, String>>> = LazyLock::new(|| {
    RwLock::new(
        [
            (ids::FILLED, "This field is required."),
            (ids::BLANK, "This field should be blank."),
            (ids::EQUAL, "Please enter a valid value."),
            (ids::SELECT_BOX_VALID, "Please select a valid option."),
        ]
        .into_iter()
        .map(|(id, message)| (id.to_owned(), message.to_owned()))
        .collect(),
    )
});

/// The default message for a validator, if one is registered.
pub fn default_message(id: &str) -> Option<String> {
    MESSAGES.read().get(id).cloned()
}

/// Register or replace the default message for a validator.
pub fn set_default_message(id: impl Into<String>, message: impl Into<String>) {
    MESSAGES.write().insert(id.into(), message.into());
}

/// Substitute message placeholders.
pub fn format_message(template: &str, label: &str, name: &str, value: &str) -> String {
    template
        .replace("%label", label)
        .replace("%name", name)
        .replace("%value", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults() {
        assert_eq!(
            default_message(ids::FILLED).as_deref(),
            Some("This field is required.")
        );
        assert!(default_message(ids::SELECT_BOX_VALID).is_some());
        assert!(default_message(":unknownRule").is_none());
    }

    #[test]
    fn test_override_default() {
        set_default_message(":customForTest", "Nope");
        assert_eq!(default_message(":customForTest").as_deref(), Some("Nope"));
    }

    #[test]
    fn test_format_placeholders() {
        assert_eq!(
            format_message("%label (%name) cannot be %value.", "Color", "color", "pink"),
            "Color (color) cannot be pink."
        );
    }
}
