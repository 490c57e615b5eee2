use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Name of the built-in black-on-white theme.
pub const THEME_LIGHT: &str = "light";
/// Name of the built-in white-on-black theme.
pub const THEME_DARK: &str = "dark";
/// Folder name used for icons rendered with explicit colors.
pub const THEME_CUSTOM: &str = "custom";

/// Foreground / background color pair.
///
/// # Example
/// ```
/// use ug_core::theme::ColorPair;
/// let pair = ColorPair::new("#FF0000", "#0000FF");
/// assert!(pair.validate().is_ok());
/// assert!(ColorPair::new("red", "#0000FF").validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorPair {
    /// Text color.
    pub fg: String,
    /// Canvas color.
    pub bg: String,
}

impl ColorPair {
    #[must_use]
    pub fn new(fg: &str, bg: &str) -> Self {
        Self {
            fg: fg.to_string(),
            bg: bg.to_string(),
        }
    }

    /// Red on blue, the example custom variant.
    #[must_use]
    pub fn custom_example() -> Self {
        Self::new("#FF0000", "#0000FF")
    }

    /// Both colors must be `#RGB` or `#RRGGBB`.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidColor` for the first malformed color.
    pub fn validate(&self) -> Result<(), CoreError> {
        for value in [&self.fg, &self.bg] {
            if !is_hex_color(value) {
                return Err(CoreError::InvalidColor {
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// `#RGB` or `#RRGGBB`, any case.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}

/// A theme name doubles as a directory name, so it must be a single
/// non-empty path segment other than `.` or `..`.
///
/// # Example
/// ```
/// use ug_core::theme::is_theme_name;
/// assert!(is_theme_name("sepia"));
/// assert!(!is_theme_name(".."));
/// assert!(!is_theme_name("a/b"));
/// ```
#[must_use]
pub fn is_theme_name(name: &str) -> bool {
    !(name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', '\0']))
}

/// Theme name → colors.
///
/// The default palette holds exactly `light` and `dark`.
///
/// # Example
/// ```
/// use ug_core::theme::Palette;
/// let palette = Palette::default();
/// assert_eq!(palette.get("light").unwrap().bg, "#FFFFFF");
/// assert!(palette.get("sepia").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    themes: IndexMap<String, ColorPair>,
}

impl Default for Palette {
    fn default() -> Self {
        let mut themes = IndexMap::new();
        themes.insert(THEME_LIGHT.to_string(), ColorPair::new("#000000", "#FFFFFF"));
        themes.insert(THEME_DARK.to_string(), ColorPair::new("#FFFFFF", "#000000"));
        Self { themes }
    }
}

impl Palette {
    /// Palette without any theme. Mostly useful in tests.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            themes: IndexMap::new(),
        }
    }

    /// Add or replace a theme.
    #[must_use]
    pub fn with_theme(mut self, name: &str, colors: ColorPair) -> Self {
        self.themes.insert(name.to_string(), colors);
        self
    }

    #[must_use]
    pub fn get(&self, theme: &str) -> Option<&ColorPair> {
        self.themes.get(theme)
    }

    /// Theme names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Validate every pair, reject the reserved `custom` name and names that
    /// are not a plain directory name.
    ///
    /// # Errors
    /// Returns `CoreError::Config` or `CoreError::InvalidColor`.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, colors) in &self.themes {
            if !is_theme_name(name) {
                return Err(CoreError::Config(format!("nom de thème invalide : {name:?}")));
            }
            if name == THEME_CUSTOM {
                return Err(CoreError::Config(format!(
                    "le thème « {THEME_CUSTOM} » est réservé aux couleurs explicites"
                )));
            }
            colors.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_forms() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#A0b1C2"));
        assert!(!is_hex_color("fff"));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("#ggg"));
        assert!(!is_hex_color("#"));
    }

    #[test]
    fn default_palette_has_two_themes() {
        let palette = Palette::default();
        assert_eq!(palette.names().collect::<Vec<_>>(), ["light", "dark"]);
        assert_eq!(palette.get("dark").unwrap().fg, "#FFFFFF");
        assert!(palette.validate().is_ok());
    }

    #[test]
    fn custom_is_not_a_palette_name() {
        let palette = Palette::default().with_theme("custom", ColorPair::custom_example());
        assert!(matches!(palette.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn theme_names_must_be_plain_directory_names() {
        for bad in ["", ".", "..", "a/b", "..\\up", "nul\0"] {
            let palette = Palette::default().with_theme(bad, ColorPair::new("#000", "#fff"));
            assert!(
                matches!(palette.validate(), Err(CoreError::Config(_))),
                "{bad:?}"
            );
        }
        let err = crate::config::parse_config(
            r##"
            [palette.".."]
            fg = "#000000"
            bg = "#FFFFFF"
            "##,
        )
        .unwrap_err();
        assert!(
            err.downcast_ref::<CoreError>()
                .is_some_and(|e| matches!(e, CoreError::Config(_)))
        );
        assert!(is_theme_name("high-contrast"));
    }
}
