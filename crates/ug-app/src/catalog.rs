use anyhow::Result;
use ug_catalog::{BlockSource, enumerate_catalog, load_blocks, stream_catalog, write_catalog};

use crate::cli::CatalogArgs;

/// Loader → enumerator → writer.
///
/// # Errors
/// Fails if the block file exists but is unreadable, or on any write error.
pub fn run(args: &CatalogArgs) -> Result<()> {
    log::info!("Chargement des blocs Unicode...");
    let loaded = load_blocks(&args.blocks)?;
    if loaded.source == BlockSource::Embedded {
        log::info!("{} blocs embarqués.", loaded.blocks.len());
    }
    if !loaded.skipped.is_empty() {
        log::warn!("{} ligne(s) ignorée(s) dans la table des blocs.", loaded.skipped.len());
    }

    log::info!("Génération du catalogue (peut prendre quelques minutes)...");
    let summary = if args.in_memory {
        let catalog = enumerate_catalog(&loaded.blocks);
        write_catalog(&args.output, &catalog)?
    } else {
        stream_catalog(&args.output, &loaded.blocks)?
    };

    summary.log_report(&args.output);
    Ok(())
}
