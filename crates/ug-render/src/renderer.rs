use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use ug_core::config::StyleConfig;
use ug_core::record::Catalog;
use ug_core::theme::{ColorPair, THEME_CUSTOM, THEME_DARK, THEME_LIGHT, is_theme_name};

use crate::error::RenderError;
use crate::naming::{check_category, icon_dir, icon_filename};
use crate::svg::render_svg;

/// Progress line interval for catalog runs.
const PROGRESS_EVERY: usize = 1000;

/// Colors and location resolved for one render call.
struct Variant<'a> {
    folder: &'a str,
    suffix: Option<&'a str>,
    colors: &'a ColorPair,
}

/// Paths produced for one entry of [`IconRenderer::render_variants`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantPaths {
    /// Key of the entry in the input map.
    pub name: String,
    /// File written with the `light` theme.
    pub light: PathBuf,
    /// File written with the `dark` theme.
    pub dark: PathBuf,
    /// File written with the explicit colors, under `custom/`.
    pub custom: PathBuf,
}

/// What to draw in a catalog run.
#[derive(Clone, Debug, Default)]
pub struct CatalogRequest {
    /// Palette themes, each producing one file per character.
    pub themes: Vec<String>,
    /// Extra variant with explicit colors, written under `custom/`.
    pub custom: Option<ColorPair>,
    /// Restrict to these blocks. Empty means every block.
    pub blocks: Vec<String>,
}

/// Counters for a catalog run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Blocks visited after filtering.
    pub blocks: usize,
    /// Characters rendered, whatever the number of variants.
    pub characters: usize,
    /// SVG files written.
    pub files: usize,
}

/// Stateless SVG icon writer configured by an immutable [`StyleConfig`].
///
/// # Example
/// ```no_run
/// use ug_core::config::StyleConfig;
/// use ug_render::IconRenderer;
/// use std::path::Path;
///
/// let renderer = IconRenderer::new(StyleConfig::default());
/// let path = renderer.render('A', "Basic Latin", "light", Path::new("icons"), None).unwrap();
/// assert!(path.ends_with("Basic Latin/light/41_light.svg"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct IconRenderer {
    style: StyleConfig,
}

impl IconRenderer {
    #[must_use]
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    #[must_use]
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    fn resolve<'a>(
        &'a self,
        theme: &'a str,
        custom: Option<&'a ColorPair>,
    ) -> Result<Variant<'a>, RenderError> {
        if let Some(colors) = custom {
            return Ok(Variant {
                folder: THEME_CUSTOM,
                suffix: None,
                colors,
            });
        }
        if !is_theme_name(theme) {
            return Err(RenderError::InvalidTheme {
                theme: theme.to_string(),
            });
        }
        let colors = self
            .style
            .palette
            .get(theme)
            .ok_or_else(|| RenderError::UnknownTheme {
                theme: theme.to_string(),
            })?;
        Ok(Variant {
            folder: theme,
            suffix: Some(theme),
            colors,
        })
    }

    /// Écrit l'icône de `ch` et retourne son chemin.
    ///
    /// With `custom` colors the file lands in `<root>/<category>/custom/<hex>.svg`
    /// whatever `theme` says; otherwise `theme` must exist in the palette and
    /// the file is `<root>/<category>/<theme>/<hex>_<theme>.svg`. Rendering
    /// the same inputs again overwrites the same file with the same bytes.
    ///
    /// # Errors
    /// `RenderError::UnknownTheme`, `RenderError::InvalidTheme`,
    /// `RenderError::InvalidCategory`,
    /// `CoreError::InvalidColor` for malformed custom colors, or any I/O error
    /// while creating the directory or writing the file.
    pub fn render(
        &self,
        ch: char,
        category: &str,
        theme: &str,
        root: &Path,
        custom: Option<&ColorPair>,
    ) -> Result<PathBuf> {
        check_category(category)?;
        if let Some(colors) = custom {
            colors.validate()?;
        }
        let variant = self.resolve(theme, custom)?;

        let dir = icon_dir(root, category, variant.folder);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Impossible de créer {}", dir.display()))?;

        let path = dir.join(icon_filename(ch, variant.suffix));
        let svg = render_svg(ch, &self.style, variant.colors);
        std::fs::write(&path, svg)
            .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
        Ok(path)
    }

    /// Light, dark and custom variants for every entry of `icons`.
    ///
    /// The custom variant is drawn with `colors`.
    ///
    /// # Errors
    /// Stops at the first failing render.
    pub fn render_variants(
        &self,
        icons: &IndexMap<String, char>,
        category: &str,
        root: &Path,
        colors: &ColorPair,
    ) -> Result<Vec<VariantPaths>> {
        let mut produced = Vec::with_capacity(icons.len());
        for (name, &ch) in icons {
            let light = self.render(ch, category, THEME_LIGHT, root, None)?;
            log::info!("Généré : {}", light.display());
            let dark = self.render(ch, category, THEME_DARK, root, None)?;
            log::info!("Généré : {}", dark.display());
            let custom = self.render(ch, category, THEME_CUSTOM, root, Some(colors))?;
            log::info!("Généré : {}", custom.display());
            produced.push(VariantPaths {
                name: name.clone(),
                light,
                dark,
                custom,
            });
        }
        Ok(produced)
    }

    /// Render every character of the selected catalog blocks.
    ///
    /// Themes are checked against the palette before anything is written.
    ///
    /// # Errors
    /// `RenderError::UnknownTheme` or `RenderError::InvalidTheme` up front,
    /// then the first failing render.
    pub fn render_catalog(
        &self,
        catalog: &Catalog,
        request: &CatalogRequest,
        root: &Path,
    ) -> Result<RenderStats> {
        for theme in &request.themes {
            if !is_theme_name(theme) {
                return Err(RenderError::InvalidTheme {
                    theme: theme.clone(),
                }
                .into());
            }
            if self.style.palette.get(theme).is_none() {
                return Err(RenderError::UnknownTheme {
                    theme: theme.clone(),
                }
                .into());
            }
        }
        if let Some(colors) = &request.custom {
            colors.validate()?;
        }
        if request.themes.is_empty() && request.custom.is_none() {
            log::warn!("Aucun thème demandé, rien à générer.");
            return Ok(RenderStats::default());
        }
        for wanted in &request.blocks {
            if catalog.get(wanted).is_none() {
                log::warn!("Bloc absent du catalogue : {wanted}");
            }
        }

        let mut stats = RenderStats::default();
        for (category, block) in catalog.iter() {
            if !request.blocks.is_empty() && !request.blocks.iter().any(|b| b == category) {
                continue;
            }
            stats.blocks += 1;
            for rec in &block.characters {
                for theme in &request.themes {
                    let path = self.render(rec.character, category, theme, root, None)?;
                    log::debug!("Généré : {}", path.display());
                    stats.files += 1;
                }
                if let Some(colors) = &request.custom {
                    let path = self.render(rec.character, category, THEME_CUSTOM, root, Some(colors))?;
                    log::debug!("Généré : {}", path.display());
                    stats.files += 1;
                }
                stats.characters += 1;
                if stats.characters % PROGRESS_EVERY == 0 {
                    log::info!("Progress: {} caractères, {} fichiers", stats.characters, stats.files);
                }
            }
        }

        log::info!(
            "{} icônes générées pour {} caractères dans {} blocs.",
            stats.files,
            stats.characters,
            stats.blocks
        );
        Ok(stats)
    }
}
