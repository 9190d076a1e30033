//! Static asset layout and the process-wide asset base path
//!
//! Theme files must sit in `<base>/themes/` and other static resources in
//! `<base>/assets/` so runtime lookups resolve. The base path is set once at
//! startup, before any viewer is built, and only read afterwards.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{Result, ViewerError};
use crate::theme::BUILTIN_THEMES;

static BASE_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Set the process-wide asset base path.
///
/// Fails if a base path was already set, even to the same value.
pub fn set_base_path(path: impl Into<PathBuf>) -> Result<()> {
    let path = path.into();
    BASE_PATH.set(path.clone()).map_err(|_| {
        let existing = BASE_PATH.get().cloned().unwrap_or(path);
        ViewerError::BasePathAlreadySet(existing)
    })?;
    tracing::info!("Asset base path set to {}", base_path_display());
    Ok(())
}

/// The process-wide asset base path, if one was set
pub fn base_path() -> Option<&'static Path> {
    BASE_PATH.get().map(PathBuf::as_path)
}

fn base_path_display() -> String {
    base_path()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

/// Layout of the static files served next to the viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    base: PathBuf,
}

impl AssetLayout {
    pub const THEMES_DIR: &'static str = "themes";
    pub const ASSETS_DIR: &'static str = "assets";

    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Layout rooted at the process-wide base path, if set
    pub fn global() -> Option<Self> {
        base_path().map(Self::new)
    }

    /// Layout for a viewer: an explicit override wins over the global path
    pub fn resolve(override_path: Option<&Path>) -> Option<Self> {
        override_path.map(Self::new).or_else(Self::global)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// `<base>/themes/`
    pub fn themes_dir(&self) -> PathBuf {
        self.base.join(Self::THEMES_DIR)
    }

    /// `<base>/assets/`
    pub fn assets_dir(&self) -> PathBuf {
        self.base.join(Self::ASSETS_DIR)
    }

    /// `<base>/themes/{id}.yaml`
    pub fn theme_file(&self, id: &str) -> PathBuf {
        self.themes_dir().join(format!("{}.yaml", id))
    }

    /// `<base>/assets/{name}`, or `None` if the name escapes the assets dir
    pub fn asset_file(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let escapes = relative.components().any(|c| {
            !matches!(c, std::path::Component::Normal(_) | std::path::Component::CurDir)
        });
        if escapes {
            tracing::warn!("Rejecting asset name outside the assets dir: {}", name);
            return None;
        }
        Some(self.assets_dir().join(relative))
    }

    /// Theme files present under `<base>/themes/`, by id
    pub fn installed_themes(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.themes_dir()) else {
            return Vec::new();
        };
        let mut ids: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "yaml" || ext == "yml"))
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .collect();
        ids.sort();
        ids
    }

    /// Create `themes/` and `assets/` and write every builtin theme into
    /// `themes/`. Existing theme files are left untouched so local
    /// customizations survive. Returns the paths that were written.
    pub fn install_builtin_themes(&self) -> Result<Vec<PathBuf>> {
        let themes_dir = self.themes_dir();
        std::fs::create_dir_all(&themes_dir).map_err(|e| ViewerError::io(&themes_dir, e))?;
        let assets_dir = self.assets_dir();
        std::fs::create_dir_all(&assets_dir).map_err(|e| ViewerError::io(&assets_dir, e))?;

        let mut written = Vec::new();
        for builtin in BUILTIN_THEMES {
            let path = self.theme_file(builtin.id);
            if path.exists() {
                tracing::debug!("Theme {} already installed, skipping", path.display());
                continue;
            }
            std::fs::write(&path, builtin.yaml).map_err(|e| ViewerError::io(&path, e))?;
            written.push(path);
        }

        tracing::info!(
            "Installed {} builtin themes into {}",
            written.len(),
            themes_dir.display()
        );
        Ok(written)
    }
}
