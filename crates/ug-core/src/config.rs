use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::theme::{ColorPair, Palette};

/// Style appliqué à chaque icône générée.
///
/// Immutable once built; the renderer receives it by reference. Every field
/// has a sane default matching the classic 24×24 monospace icon.
///
/// # Example
/// ```
/// use ug_core::config::StyleConfig;
/// let config = StyleConfig::default();
/// assert_eq!(config.size, 24);
/// assert_eq!(config.font_size, 20);
/// assert_eq!(config.font_family, "monospace");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StyleConfig {
    /// Largeur et hauteur du canevas carré.
    pub size: u32,
    /// Taille de police du caractère.
    pub font_size: u32,
    /// Famille de police CSS.
    pub font_family: String,
    /// Thèmes nommés (light / dark par défaut).
    pub palette: Palette,
    /// Couleurs de la variante « custom » du rendu par lots.
    pub custom: ColorPair,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            size: 24,
            font_size: 20,
            font_family: "monospace".to_string(),
            palette: Palette::default(),
            custom: ColorPair::custom_example(),
        }
    }
}

impl StyleConfig {
    /// Reject values that would produce a broken SVG document.
    ///
    /// # Errors
    /// Returns `CoreError::Config` or `CoreError::InvalidColor`.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.size == 0 {
            return Err(CoreError::Config("size doit être > 0".into()));
        }
        if self.font_size == 0 {
            return Err(CoreError::Config("font_size doit être > 0".into()));
        }
        if self.font_family.trim().is_empty()
            || self.font_family.contains(['"', '<', '>', '&'])
        {
            return Err(CoreError::Config(format!(
                "font_family invalide : {:?}",
                self.font_family
            )));
        }
        self.palette.validate()?;
        self.custom.validate()
    }
}

/// Structure TOML intermédiaire, toutes les sections sont optionnelles.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    icon: Option<IconSection>,
    palette: Option<IndexMap<String, ColorPair>>,
    custom: Option<ColorPair>,
}

/// `[icon]` section, all fields optional for partial override.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct IconSection {
    size: Option<u32>,
    font_size: Option<u32>,
    font_family: Option<String>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// Themes listed under `[palette.<name>]` are added to (or replace) the
/// built-in `light` and `dark` entries.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed or fails validation.
///
/// # Example
/// ```no_run
/// use ug_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<StyleConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Configuration rejetée : {}", path.display()))?;
    log::debug!("Config chargée depuis {}", path.display());
    Ok(config)
}

/// Parse TOML text into a validated [`StyleConfig`].
///
/// # Errors
/// Returns an error on malformed TOML or invalid values.
pub fn parse_config(content: &str) -> Result<StyleConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = StyleConfig::default();

    if let Some(icon) = file.icon {
        if let Some(v) = icon.size {
            config.size = v;
        }
        if let Some(v) = icon.font_size {
            config.font_size = v;
        }
        if let Some(v) = icon.font_family {
            config.font_family = v;
        }
    }
    if let Some(themes) = file.palette {
        for (name, colors) in themes {
            config.palette = config.palette.with_theme(&name, colors);
        }
    }
    if let Some(v) = file.custom {
        config.custom = v;
    }

    config.validate()?;
    Ok(config)
}
