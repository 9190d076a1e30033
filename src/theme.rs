//! Theme system for the viewer
//!
//! Provides YAML-based theming support with compile-time embedded themes,
//! themes deployed next to the viewer's static assets, and user-defined
//! themes from the config directory.
//!
//! Theme loading priority:
//! 1. Asset base path: `<base>/themes/{id}.yaml`
//! 2. User config: `~/.config/sourceview/themes/{id}.yaml`
//! 3. Embedded: Built-in themes compiled into binary

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::assets::AssetLayout;
use crate::error::{Result, ViewerError};
use crate::syntax::{highlight_id_for_name, HighlightId, HIGHLIGHT_NAMES};

// Embed theme YAML files at compile time
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const GITHUB_DARK_YAML: &str = include_str!("../themes/github-dark.yaml");
pub const GITHUB_LIGHT_YAML: &str = include_str!("../themes/github-light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "github-dark",
        yaml: GITHUB_DARK_YAML,
    },
    BuiltinTheme {
        id: "github-light",
        yaml: GITHUB_LIGHT_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// Deployed under the asset base path
    Assets,
    /// User-defined theme in ~/.config/sourceview/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme> {
    let content = std::fs::read_to_string(path).map_err(|e| ViewerError::io(path, e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: asset base path → user → builtin.
///
/// A file that exists but fails to load is skipped with a warning and the
/// next source is tried.
pub fn load_theme(id: &str, assets: Option<&AssetLayout>) -> Result<Theme> {
    let candidates = assets
        .map(|layout| layout.theme_file(id))
        .into_iter()
        .chain(
            crate::config_paths::themes_dir().map(|dir| dir.join(format!("{}.yaml", id))),
        );

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match from_file(&path) {
            Ok(theme) => {
                tracing::info!("Loaded theme from {}", path.display());
                return Ok(theme);
            }
            Err(e) => tracing::warn!("Skipping theme file {}: {}", path.display(), e),
        }
    }

    tracing::debug!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// Load a theme, falling back to the default theme on any error
pub fn load_theme_or_default(id: &str, assets: Option<&AssetLayout>) -> Theme {
    match load_theme(id, assets) {
        Ok(theme) => theme,
        Err(e) => {
            tracing::warn!("Failed to load theme '{}': {}, using default", id, e);
            Theme::default()
        }
    }
}

/// List all available themes from all sources.
///
/// Duplicates resolve by priority: asset themes, then user themes, then builtins.
pub fn list_available_themes(assets: Option<&AssetLayout>) -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = HashSet::new();

    if let Some(layout) = assets {
        for id in layout.installed_themes() {
            if seen_ids.insert(id.clone()) {
                let (name, description) = describe(from_file(&layout.theme_file(&id)), &id);
                themes.push(ThemeInfo {
                    id,
                    name,
                    description,
                    source: ThemeSource::Assets,
                });
            }
        }
    }

    if let Some(user_dir) = crate::config_paths::themes_dir() {
        if let Ok(entries) = std::fs::read_dir(&user_dir) {
            for path in entries.filter_map(|e| e.ok()).map(|e| e.path()) {
                if !path
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
                {
                    continue;
                }
                let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                if seen_ids.insert(id.to_string()) {
                    let (name, description) = describe(from_file(&path), id);
                    themes.push(ThemeInfo {
                        id: id.to_string(),
                        name,
                        description,
                        source: ThemeSource::User,
                    });
                }
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let (name, description) = describe(Theme::from_yaml(builtin.yaml), builtin.id);
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                description,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}

/// Display name and description for a listing; unreadable files show their id
fn describe(theme: Result<Theme>, id: &str) -> (String, Option<String>) {
    match theme {
        Ok(theme) => (theme.name, theme.description),
        Err(_) => (id.to_string(), None),
    }
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|part| u8::from_str_radix(part, 16).ok())
                .ok_or_else(|| ViewerError::Theme(format!("Invalid color: {}", s)))
        };
        match hex.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(ViewerError::Theme(format!("Invalid color format: {}", s))),
        }
    }

    /// 24-bit ANSI foreground escape sequence
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// 24-bit ANSI background escape sequence
    pub fn ansi_bg(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
    /// Highlight capture name → hex color
    #[serde(default)]
    pub syntax: BTreeMap<String, String>,
}

/// UI theme colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub editor: EditorThemeData,
    pub gutter: GutterThemeData,
}

/// Text area colors
#[derive(Debug, Clone, Deserialize)]
pub struct EditorThemeData {
    pub background: String,
    pub foreground: String,
    pub current_line_background: String,
    #[serde(default)]
    pub selection_background: Option<String>,
    #[serde(default)]
    pub selection_foreground: Option<String>,
}

/// Gutter (line numbers) colors
#[derive(Debug, Clone, Deserialize)]
pub struct GutterThemeData {
    pub background: String,
    pub foreground: String,
    pub foreground_active: String,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: Option<String>,
    pub editor: EditorTheme,
    pub gutter: GutterTheme,
    pub syntax: SyntaxTheme,
}

/// Text area colors (resolved)
#[derive(Debug, Clone)]
pub struct EditorTheme {
    pub background: Color,
    pub foreground: Color,
    pub current_line_background: Color,
    /// Background color for selected text
    pub selection_background: Color,
    /// Foreground override for selected text (None keeps syntax colors)
    pub selection_foreground: Option<Color>,
}

/// Gutter colors (resolved)
#[derive(Debug, Clone)]
pub struct GutterTheme {
    pub background: Color,
    pub foreground: Color,
    /// Line number color for lines inside the selection
    pub foreground_active: Color,
}

/// Syntax colors indexed by [`HighlightId`]
#[derive(Debug, Clone, Default)]
pub struct SyntaxTheme {
    colors: Vec<Option<Color>>,
}

impl SyntaxTheme {
    /// Resolve a name → color map, letting `function.builtin` inherit from
    /// `function` when it has no entry of its own
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let mut explicit: Vec<Option<Color>> = vec![None; HIGHLIGHT_NAMES.len()];
        for (name, hex) in map {
            match highlight_id_for_name(name) {
                Some(id) if HIGHLIGHT_NAMES[id as usize] == name.as_str() => {
                    explicit[id as usize] = Some(Color::from_hex(hex)?);
                }
                _ => tracing::debug!("Ignoring unknown syntax color '{}'", name),
            }
        }

        let colors = HIGHLIGHT_NAMES
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                explicit[idx].or_else(|| {
                    let mut current = *name;
                    while let Some(dot) = current.rfind('.') {
                        current = &current[..dot];
                        if let Some(parent) = highlight_id_for_name(current) {
                            if let Some(color) = explicit[parent as usize] {
                                return Some(color);
                            }
                        }
                    }
                    None
                })
            })
            .collect();

        Ok(Self { colors })
    }

    /// Color for a highlight, if the theme styles it
    pub fn color_for_highlight(&self, id: HighlightId) -> Option<Color> {
        self.colors.get(id as usize).copied().flatten()
    }
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let data: ThemeData = serde_yaml::from_str(yaml)
            .map_err(|e| ViewerError::Theme(format!("YAML parse error: {}", e)))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ViewerError::Theme(format!("Unknown theme id: {}", id)))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self> {
        let default_selection_bg = Color::rgb(0x26, 0x4F, 0x78);
        let editor = &data.ui.editor;

        Ok(Theme {
            name: data.name,
            description: data.description,
            editor: EditorTheme {
                background: Color::from_hex(&editor.background)?,
                foreground: Color::from_hex(&editor.foreground)?,
                current_line_background: Color::from_hex(&editor.current_line_background)?,
                selection_background: editor
                    .selection_background
                    .as_deref()
                    .map(Color::from_hex)
                    .transpose()?
                    .unwrap_or(default_selection_bg),
                selection_foreground: editor
                    .selection_foreground
                    .as_deref()
                    .map(Color::from_hex)
                    .transpose()?,
            },
            gutter: GutterTheme {
                background: Color::from_hex(&data.ui.gutter.background)?,
                foreground: Color::from_hex(&data.ui.gutter.foreground)?,
                foreground_active: Color::from_hex(&data.ui.gutter.foreground_active)?,
            },
            syntax: SyntaxTheme::from_map(&data.syntax)?,
        })
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        match Theme::from_yaml(DEFAULT_DARK_YAML) {
            Ok(theme) => theme,
            Err(_) => Theme {
                name: "Default Dark".to_string(),
                description: None,
                editor: EditorTheme {
                    background: Color::rgb(0x1E, 0x1E, 0x1E),
                    foreground: Color::rgb(0xD4, 0xD4, 0xD4),
                    current_line_background: Color::rgb(0x2A, 0x2A, 0x2A),
                    selection_background: Color::rgb(0x26, 0x4F, 0x78),
                    selection_foreground: None,
                },
                gutter: GutterTheme {
                    background: Color::rgb(0x1E, 0x1E, 0x1E),
                    foreground: Color::rgb(0x85, 0x85, 0x85),
                    foreground_active: Color::rgb(0xC6, 0xC6, 0xC6),
                },
                syntax: SyntaxTheme::default(),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}
