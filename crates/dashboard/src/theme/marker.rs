//! Document-level theme marker

use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

/// Theme advertised at the document root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentTheme {
    Light,
    Dark,
}

impl DocumentTheme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Receives the document theme whenever dark mode is set
///
/// Applied on init and on every dark-mode change; never torn down.
pub trait DocumentMarker: Send + Sync {
    fn apply(&self, theme: DocumentTheme);
}

/// Root attributes and body classes of the window document
///
/// Mirrors what a browser page exposes to global stylesheets: a
/// `data-theme` attribute and a `dark-mode` class on the body.
#[derive(Default)]
pub struct DocumentAttributes {
    attributes: RwLock<BTreeMap<String, String>>,
    body_classes: RwLock<BTreeSet<String>>,
}

impl DocumentAttributes {
    pub const THEME_ATTRIBUTE: &'static str = "data-theme";
    pub const DARK_CLASS: &'static str = "dark-mode";

    pub fn new() -> Self {
        Self::default()
    }

    /// Get a root attribute value
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.read().unwrap().get(name).cloned()
    }

    /// Check if the body carries a class
    pub fn has_class(&self, class: &str) -> bool {
        self.body_classes.read().unwrap().contains(class)
    }

    /// The theme currently advertised, if any has been applied yet
    pub fn theme(&self) -> Option<DocumentTheme> {
        match self.attribute(Self::THEME_ATTRIBUTE)?.as_str() {
            "dark" => Some(DocumentTheme::Dark),
            "light" => Some(DocumentTheme::Light),
            _ => None,
        }
    }
}

impl DocumentMarker for DocumentAttributes {
    fn apply(&self, theme: DocumentTheme) {
        self.attributes
            .write()
            .unwrap()
            .insert(Self::THEME_ATTRIBUTE.to_string(), theme.as_str().to_string());

        let mut classes = self.body_classes.write().unwrap();
        if theme.is_dark() {
            classes.insert(Self::DARK_CLASS.to_string());
        } else {
            classes.remove(Self::DARK_CLASS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_document() {
        let doc = DocumentAttributes::new();
        assert!(doc.theme().is_none());
        assert!(!doc.has_class(DocumentAttributes::DARK_CLASS));
    }

    #[test]
    fn test_apply_dark_then_light() {
        let doc = DocumentAttributes::new();
        doc.apply(DocumentTheme::Dark);
        assert_eq!(doc.attribute("data-theme").as_deref(), Some("dark"));
        assert!(doc.has_class("dark-mode"));

        doc.apply(DocumentTheme::Light);
        assert_eq!(doc.theme(), Some(DocumentTheme::Light));
        assert!(!doc.has_class("dark-mode"));
    }
}
