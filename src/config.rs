//! Viewer configuration
//!
//! One struct enumerates every recognized option and is passed once at
//! construction. The same struct is persisted in
//! `~/.config/sourceview/config.yaml` so the CLI can pick up user defaults.
//!
//! There is no read-only switch: viewers are never editable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};
use crate::model::ScrollRevealMode;
use crate::syntax::LanguageId;

/// Construction-time configuration for a viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Highlighting grammar applied to the whole document
    pub grammar: LanguageId,
    /// Theme id (e.g., "default-dark", "github-light")
    pub theme: String,
    /// Lines kept between a revealed selection and the viewport edge
    pub scroll_padding: usize,
    /// How a selection outside the viewport is scrolled into view
    pub reveal_mode: ScrollRevealMode,
    /// Viewport height in lines
    pub visible_lines: usize,
    /// Viewport width in columns
    pub visible_columns: usize,
    /// Overrides the process-wide asset base path for this viewer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            grammar: LanguageId::Python,
            theme: default_theme(),
            scroll_padding: 1,
            reveal_mode: ScrollRevealMode::Minimal,
            visible_lines: 25,
            visible_columns: 80,
            base_path: None,
        }
    }
}

fn default_theme() -> String {
    "default-dark".to_string()
}

impl ViewerConfig {
    /// Builder-style grammar override
    pub fn with_grammar(mut self, grammar: LanguageId) -> Self {
        self.grammar = grammar;
        self
    }

    /// Builder-style theme override
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Builder-style viewport size override
    pub fn with_viewport(mut self, visible_lines: usize, visible_columns: usize) -> Self {
        self.visible_lines = visible_lines;
        self.visible_columns = visible_columns;
        self
    }

    /// Builder-style asset base path override
    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Load config from the user config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults when the
    /// file is missing or malformed
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the user config directory, returning the file written
    pub fn save(&self) -> Result<PathBuf> {
        let path = crate::config_paths::config_file().ok_or(ViewerError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ViewerError::io(parent, e))?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).map_err(|e| ViewerError::io(path, e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
