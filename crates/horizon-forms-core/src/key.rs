//! Item keys and display labels.
//!
//! HTML transports every submitted value as text, so a choice key only has
//! one identity: its string form. [`Key`] canonicalizes scalars to that form
//! when it is constructed, which makes `1`, `"1"` and `1.0` the same key.
//! Every membership test and every stored selection goes through `Key`.
//!
//! # Example
//!
//! ```
//! use horizon_forms_core::Key;
//!
//! assert_eq!(Key::from(1), Key::from("1"));
//! assert_eq!(Key::from(0.0), Key::from("0"));
//! assert_eq!(Key::from(true), Key::from("1"));
//! assert_eq!(Key::from(false), Key::from(""));
//! ```

use std::borrow::Borrow;
use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A canonical, string-valued item key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    /// The empty key, used by the prompt entry of a select box.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// The canonical string form of this key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key and return its string form.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the key is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the key is written like a decimal integer without leading zeros.
    ///
    /// Such keys are shown bare in diagnostics, every other key is quoted.
    pub fn is_integer_like(&self) -> bool {
        let digits = self.0.strip_prefix('-').unwrap_or(&self.0);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        if digits.len() > 1 && digits.starts_with('0') {
            return false;
        }
        // "-0" is not an integer literal
        !(digits == "0" && self.0.starts_with('-'))
    }

    /// Render the key the way error messages list allowed values.
    pub fn export(&self) -> String {
        if self.is_integer_like() {
            self.0.clone()
        } else {
            format!("'{}'", self.0.replace('\\', "\\\\").replace('\'', "\\'"))
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Self(if value { "1".to_owned() } else { String::new() })
    }
}

/// Floats use Rust's `Display`, which never switches to exponent notation
/// and drops the fraction of whole numbers: `1.0` is `"1"` and `1e20` is
/// `"100000000000000000000"`. Non-finite values become `"NaN"`, `"inf"` and
/// `"-inf"`, and `-0.0` becomes `"-0"`. Large floats therefore do not match
/// keys written in exponent form such as `"1.0E+20"`.
impl From<f64> for Key {
    fn from(value: f64) -> Self {
        Self(value.to_string())
    }
}

impl From<f32> for Key {
    fn from(value: f32) -> Self {
        Self(value.to_string())
    }
}

impl From<&Label> for Key {
    fn from(value: &Label) -> Self {
        Self(value.as_str().to_owned())
    }
}

macro_rules! impl_key_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

impl_key_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

struct KeyVisitor;

impl Visitor<'_> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number or boolean key")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
        Ok(Key::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Key, E> {
        Ok(Key::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
        Ok(Key::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
        Ok(Key::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Key, E> {
        Ok(Key::from(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Key, E> {
        Ok(Key::from(v))
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KeyVisitor)
    }
}

/// A display label for an item, a group, a prompt or a caption.
///
/// Labels are opaque to the controls: they are only stored, translated and
/// rendered. Plain text is escaped when rendered; markup is emitted verbatim.
///
/// Serde sees a label as a bare string. Markup serializes as its text and
/// always deserializes as [`Label::Text`], so configuration cannot produce
/// an unescaped label; build [`Label::Html`] in code instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    /// Plain text.
    Text(String),
    /// Pre-built HTML markup.
    Html(String),
}

impl Label {
    /// Create a plain-text label.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a markup label.
    pub fn html(html: impl Into<String>) -> Self {
        Self::Html(html.into())
    }

    /// The stringified form of the label.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Html(s) => s,
        }
    }

    /// Whether this label carries markup.
    pub fn is_html(&self) -> bool {
        matches!(self, Self::Html(_))
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Label {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Scalars are accepted so that `["a", 1, 2.5]` works as a label list.
        let key = deserializer.deserialize_any(KeyVisitor)?;
        Ok(Self::Text(key.into_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_canonicalization() {
        assert_eq!(Key::from(0), Key::from("0"));
        assert_eq!(Key::from(0.0), Key::from("0"));
        assert_eq!(Key::from(2.5), Key::from("2.5"));
        assert_eq!(Key::from(42u8), Key::from("42"));
        assert_eq!(Key::from(-7i64).as_str(), "-7");
        assert_eq!(Key::from(true).as_str(), "1");
        assert!(Key::from(false).is_empty());
    }

    #[test]
    fn test_float_display_form() {
        assert_eq!(Key::from(1e20).as_str(), "100000000000000000000");
        assert_eq!(Key::from(f64::NAN).as_str(), "NaN");
        assert_eq!(Key::from(f64::INFINITY).as_str(), "inf");
        assert_eq!(Key::from(-0.0).as_str(), "-0");
    }

    #[test]
    fn test_markup_label_loads_as_text() {
        let json = serde_json::to_string(&Label::html("<b>A</b>")).unwrap();
        assert_eq!(json, r#""<b>A</b>""#);

        let label: Label = serde_json::from_str(&json).unwrap();
        assert_eq!(label, Label::text("<b>A</b>"));
        assert!(!label.is_html());
    }

    #[test]
    fn test_integer_like() {
        assert!(Key::from("0").is_integer_like());
        assert!(Key::from("15").is_integer_like());
        assert!(Key::from("-3").is_integer_like());
        assert!(!Key::from("007").is_integer_like());
        assert!(!Key::from("-0").is_integer_like());
        assert!(!Key::from("1.5").is_integer_like());
        assert!(!Key::from("").is_integer_like());
        assert!(!Key::from("a").is_integer_like());
    }

    #[test]
    fn test_export() {
        assert_eq!(Key::from(12).export(), "12");
        assert_eq!(Key::from("red").export(), "'red'");
        assert_eq!(Key::from("it's").export(), "'it\\'s'");
    }

    #[test]
    fn test_label_stringification() {
        assert_eq!(Label::text("One").as_str(), "One");
        assert_eq!(Label::html("<b>One</b>").to_string(), "<b>One</b>");
        assert!(Label::html("<i>x</i>").is_html());
        assert_eq!(Key::from(&Label::text("One")), Key::from("One"));
    }
}
