use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// uniglyph — Unicode block catalog and SVG icon generator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Fichier de style TOML. Défaut : config/default.toml.
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Énumère les blocs Unicode et écrit le catalogue JSON.
    Catalog(CatalogArgs),
    /// Génère les icônes SVG à partir du catalogue JSON.
    Icons(IconsArgs),
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Table des blocs (format Blocks.txt). Absente : sous-ensemble embarqué.
    #[arg(long, default_value = "data/Blocks-15.1.0.txt")]
    pub blocks: PathBuf,

    /// Catalogue JSON produit.
    #[arg(short, long, default_value = "data/unicode_icons.json")]
    pub output: PathBuf,

    /// Construire tout le catalogue en mémoire avant l'écriture.
    #[arg(long, default_value_t = false)]
    pub in_memory: bool,
}

#[derive(Args, Debug)]
pub struct IconsArgs {
    /// Catalogue JSON lu. Absent : jeu d'icônes d'exemple.
    #[arg(long, default_value = "data/unicode_icons.json")]
    pub catalog: PathBuf,

    /// Racine des icônes générées.
    #[arg(short, long, default_value = "icons")]
    pub output: PathBuf,

    /// Thème de palette à générer (répétable).
    #[arg(long = "theme", value_name = "THEME", default_value = "light")]
    pub themes: Vec<String>,

    /// Ajouter la variante aux couleurs personnalisées.
    #[arg(long, default_value_t = false)]
    pub custom: bool,

    /// Couleur du texte de la variante personnalisée (implique --custom).
    #[arg(long, requires = "bg")]
    pub fg: Option<String>,

    /// Couleur de fond de la variante personnalisée (implique --custom).
    #[arg(long, requires = "fg")]
    pub bg: Option<String>,

    /// Limiter le rendu à ce bloc (répétable).
    #[arg(long = "block", value_name = "NAME")]
    pub blocks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_defaults() {
        let cli = Cli::try_parse_from(["uniglyph", "catalog"]).unwrap();
        let Command::Catalog(args) = cli.command else {
            panic!("expected catalog");
        };
        assert_eq!(args.blocks, PathBuf::from("data/Blocks-15.1.0.txt"));
        assert_eq!(args.output, PathBuf::from("data/unicode_icons.json"));
        assert!(!args.in_memory);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn icons_defaults_to_light() {
        let cli = Cli::try_parse_from(["uniglyph", "icons"]).unwrap();
        let Command::Icons(args) = cli.command else {
            panic!("expected icons");
        };
        assert_eq!(args.themes, ["light"]);
        assert_eq!(args.output, PathBuf::from("icons"));
        assert!(args.blocks.is_empty());
    }

    #[test]
    fn repeated_themes_and_blocks() {
        let cli = Cli::try_parse_from([
            "uniglyph", "icons", "--theme", "light", "--theme", "dark", "--block", "Arrows",
        ])
        .unwrap();
        let Command::Icons(args) = cli.command else {
            panic!("expected icons");
        };
        assert_eq!(args.themes, ["light", "dark"]);
        assert_eq!(args.blocks, ["Arrows"]);
    }

    #[test]
    fn fg_requires_bg() {
        assert!(Cli::try_parse_from(["uniglyph", "icons", "--fg", "#FF0000"]).is_err());
        assert!(
            Cli::try_parse_from(["uniglyph", "icons", "--fg", "#FF0000", "--bg", "#0000FF"])
                .is_ok()
        );
    }
}
