//! Access to submitted form data.
//!
//! Parsing HTTP requests is left to the caller. Controls only see an
//! [`HttpDataSource`], which hands out the raw submitted value for a control
//! name, sanitized according to the kind of data the control expects.

use std::collections::HashMap;

/// The kind of value a control reads from the submitted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpDataKind {
    /// Multi-line text. Line endings are normalized to `\n`.
    #[default]
    Text,
    /// Single-line text. Line breaks become spaces and the value is trimmed.
    Line,
}

/// A source of raw submitted values.
pub trait HttpDataSource {
    /// The submitted value for `name`, or `None` if nothing usable was sent.
    fn http_data(&self, kind: HttpDataKind, name: &str) -> Option<String>;
}

/// Submitted values held in memory, keyed by control name.
#[derive(Debug, Clone, Default)]
pub struct SubmittedData {
    values: HashMap<String, String>,
}

impl SubmittedData {
    /// Create an empty data set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a submitted value, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add a submitted value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for SubmittedData {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}

impl HttpDataSource for SubmittedData {
    fn http_data(&self, kind: HttpDataKind, name: &str) -> Option<String> {
        self.values.get(name).and_then(|raw| sanitize(kind, raw))
    }
}

/// Normalize a raw value for the given kind.
///
/// Values containing control characters other than tab and line breaks are
/// rejected.
pub fn sanitize(kind: HttpDataKind, raw: &str) -> Option<String> {
    let text = raw.replace("\r\n", "\n");
    if text
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\t' | '\n' | '\r'))
    {
        return None;
    }

    match kind {
        HttpDataKind::Text => Some(text),
        HttpDataKind::Line => Some(text.replace(['\r', '\n'], " ").trim().to_owned()),
    }
}
