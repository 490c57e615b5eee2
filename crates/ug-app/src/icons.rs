use anyhow::Result;
use ug_core::config::StyleConfig;
use ug_core::theme::{ColorPair, THEME_LIGHT};
use ug_render::renderer::CatalogRequest;
use ug_render::sample::SAMPLE_CATEGORY;
use ug_render::{IconRenderer, sample_icons};

use crate::cli::IconsArgs;

/// Custom variant colors: explicit `--fg/--bg`, else the configured pair if
/// `--custom` was given.
fn custom_colors(args: &IconsArgs, style: &StyleConfig) -> Option<ColorPair> {
    match (&args.fg, &args.bg) {
        (Some(fg), Some(bg)) => Some(ColorPair::new(fg, bg)),
        _ if args.custom => Some(style.custom.clone()),
        _ => None,
    }
}

/// Render the catalog, or the sample set when no catalog exists.
///
/// # Errors
/// Fails on an unreadable or inconsistent catalog, an unknown theme, or any
/// write error.
pub fn run(args: &IconsArgs, style: StyleConfig) -> Result<()> {
    let custom = custom_colors(args, &style);
    let renderer = IconRenderer::new(style);

    if !args.catalog.exists() {
        log::warn!(
            "{} introuvable. Génération du jeu d'exemple.",
            args.catalog.display()
        );
        if args.themes.iter().any(|t| t != THEME_LIGHT) || !args.blocks.is_empty() {
            log::warn!("--theme et --block sont ignorés pour le jeu d'exemple (light, dark, custom).");
        }
        let colors = custom.as_ref().unwrap_or(&renderer.style().custom);
        let produced =
            renderer.render_variants(&sample_icons(), SAMPLE_CATEGORY, &args.output, colors)?;
        log::info!("{} icônes d'exemple générées.", produced.len() * 3);
        return Ok(());
    }

    let catalog = ug_catalog::read_catalog(&args.catalog)?;
    let request = CatalogRequest {
        themes: args.themes.clone(),
        custom,
        blocks: args.blocks.clone(),
    };
    renderer.render_catalog(&catalog, &request, &args.output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn args(root: &Path) -> IconsArgs {
        IconsArgs {
            catalog: root.join("data/unicode_icons.json"),
            output: root.join("icons"),
            themes: vec!["light".into()],
            custom: false,
            fg: None,
            bg: None,
            blocks: Vec::new(),
        }
    }

    #[test]
    fn explicit_colors_win_over_configured() {
        let mut a = args(Path::new("."));
        a.custom = true;
        let style = StyleConfig::default();
        assert_eq!(custom_colors(&a, &style), Some(ColorPair::custom_example()));
        a.fg = Some("#111111".into());
        a.bg = Some("#222222".into());
        assert_eq!(
            custom_colors(&a, &style),
            Some(ColorPair::new("#111111", "#222222"))
        );
        a.custom = false;
        a.fg = None;
        a.bg = None;
        assert_eq!(custom_colors(&a, &style), None);
    }

    #[test]
    fn missing_catalog_renders_sample_set() {
        let dir = tempfile::tempdir().unwrap();
        run(&args(dir.path()), StyleConfig::default()).unwrap();
        let sample = dir.path().join("icons/sample");
        assert!(sample.join("light/e28692_light.svg").exists());
        assert!(sample.join("dark/e29c93_dark.svg").exists());
        assert!(sample.join("custom/e29a99.svg").exists());
    }

    #[test]
    fn sample_set_uses_explicit_colors() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = args(dir.path());
        a.fg = Some("#00FF00".into());
        a.bg = Some("#000000".into());
        run(&a, StyleConfig::default()).unwrap();
        let svg =
            std::fs::read_to_string(dir.path().join("icons/sample/custom/e29a99.svg")).unwrap();
        assert!(svg.contains(r##"fill="#000000"/>"##));
        assert!(svg.contains(r##"fill="#00FF00""##));
        assert!(!svg.contains("#FF0000"));
    }

    #[test]
    fn catalog_is_rendered_per_block() {
        let dir = tempfile::tempdir().unwrap();
        let a = args(dir.path());
        let mut table = ug_catalog::blocks::embedded_blocks();
        table.retain(|name, _| name == "Basic Latin");
        ug_catalog::stream_catalog(&a.catalog, &table).unwrap();

        run(&a, StyleConfig::default()).unwrap();
        let light = dir.path().join("icons/Basic Latin/light");
        assert!(light.join("41_light.svg").exists());
        assert_eq!(std::fs::read_dir(&light).unwrap().count(), 95);
    }

    #[test]
    fn unknown_theme_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = args(dir.path());
        let mut table = ug_catalog::blocks::embedded_blocks();
        table.retain(|name, _| name == "Basic Latin");
        ug_catalog::stream_catalog(&a.catalog, &table).unwrap();
        a.themes = vec!["sepia".into()];
        assert!(run(&a, StyleConfig::default()).is_err());
    }
}
