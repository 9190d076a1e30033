//! Grammar identification and detection
//!
//! Maps file extensions and grammar tags to language IDs.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Grammars the viewer can highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    #[serde(alias = "text", alias = "plain")]
    PlainText,
    #[default]
    Python,
    Rust,
}

impl LanguageId {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "py" | "pyi" | "pyw" => LanguageId::Python,
            "rs" => LanguageId::Rust,
            _ => LanguageId::PlainText,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(LanguageId::PlainText)
    }

    /// Look up a grammar by its tag (`"python"`, `"rust"`, `"text"`)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "python" | "py" => Some(LanguageId::Python),
            "rust" | "rs" => Some(LanguageId::Rust),
            "text" | "plain" | "plaintext" => Some(LanguageId::PlainText),
            _ => None,
        }
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "Plain Text",
            LanguageId::Python => "Python",
            LanguageId::Rust => "Rust",
        }
    }

    /// Check if this language has syntax highlighting support
    pub fn has_highlighting(&self) -> bool {
        !matches!(self, LanguageId::PlainText)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(LanguageId::from_extension("py"), LanguageId::Python);
        assert_eq!(LanguageId::from_extension("PY"), LanguageId::Python);
        assert_eq!(LanguageId::from_extension("rs"), LanguageId::Rust);
        assert_eq!(LanguageId::from_extension("txt"), LanguageId::PlainText);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            LanguageId::from_path(Path::new("/srv/scripts/job.py")),
            LanguageId::Python
        );
        assert_eq!(
            LanguageId::from_path(Path::new("main.rs")),
            LanguageId::Rust
        );
        assert_eq!(
            LanguageId::from_path(Path::new("Makefile")),
            LanguageId::PlainText
        );
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(LanguageId::from_tag("python"), Some(LanguageId::Python));
        assert_eq!(LanguageId::from_tag("Rust"), Some(LanguageId::Rust));
        assert_eq!(LanguageId::from_tag("text"), Some(LanguageId::PlainText));
        assert_eq!(LanguageId::from_tag("cobol"), None);
    }

    #[test]
    fn test_default_grammar_is_python() {
        assert_eq!(LanguageId::default(), LanguageId::Python);
    }

    #[test]
    fn test_serde_tags() {
        let lang: LanguageId = serde_yaml::from_str("rust").unwrap();
        assert_eq!(lang, LanguageId::Rust);
        let lang: LanguageId = serde_yaml::from_str("text").unwrap();
        assert_eq!(lang, LanguageId::PlainText);
    }
}
