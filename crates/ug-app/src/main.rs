use anyhow::Result;
use clap::Parser;
use ug_core::config::StyleConfig;

pub mod catalog;
pub mod cli;
pub mod icons;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    // 3. Lancer le job demandé
    match &cli.command {
        cli::Command::Catalog(args) => catalog::run(args),
        cli::Command::Icons(args) => {
            let style = resolve_config(&cli)?;
            icons::run(args, style)
        }
    }
}

/// Resolve the style: config file when present, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<StyleConfig> {
    if cli.config.exists() {
        ug_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(StyleConfig::default())
    }
}
