//! Label translation.

use crate::key::Label;

/// Translates labels before they are rendered.
///
/// Implementations receive plain text and markup labels alike and may return
/// either. Unknown labels should be returned unchanged.
pub trait Translator: Send + Sync {
    /// Translate a label.
    fn translate(&self, label: &Label) -> Label;
}

/// A translator that returns every label unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, label: &Label) -> Label {
        label.clone()
    }
}

impl<F> Translator for F
where
    F: Fn(&Label) -> Label + Send + Sync,
{
    fn translate(&self, label: &Label) -> Label {
        self(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let label = Label::html("<b>x</b>");
        assert_eq!(IdentityTranslator.translate(&label), label);
    }

    #[test]
    fn test_closure_translator() {
        let upper = |label: &Label| Label::text(label.as_str().to_uppercase());
        assert_eq!(upper.translate(&Label::text("red")), Label::text("RED"));
    }
}
