use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serializer as _;
use serde::ser::SerializeMap;
use ug_core::record::{BlockTable, Catalog, CatalogBlock, CharacterRecord};

use crate::enumerate::enumerate_block;

/// Characters kept per block for the console sample.
const SAMPLE_LEN: usize = 3;
/// Blocks shown at each end of the console sample.
const SAMPLE_BLOCKS: usize = 3;

/// Count and first few characters of one written block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockSummary {
    /// Block name, as in the catalog.
    pub name: String,
    /// Printable characters written for the block.
    pub count: usize,
    /// Leading records, at most three.
    pub sample: Vec<CharacterRecord>,
}

/// What a catalog write produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    /// Per-block counts, catalog order.
    pub blocks: Vec<BlockSummary>,
    /// Sum of all block counts.
    pub total_characters: usize,
    /// Size of the written file.
    pub bytes: u64,
}

impl CatalogSummary {
    fn record(&mut self, name: &str, entry: &CatalogBlock) {
        self.total_characters += entry.characters.len();
        self.blocks.push(BlockSummary {
            name: name.to_string(),
            count: entry.characters.len(),
            sample: entry.characters.iter().take(SAMPLE_LEN).cloned().collect(),
        });
    }

    /// File size in MiB.
    #[must_use]
    pub fn megabytes(&self) -> f64 {
        self.bytes as f64 / 1024.0 / 1024.0
    }

    /// Indices of the blocks shown in the sample: first three, then last three.
    #[must_use]
    pub fn sample_indices(&self) -> Vec<usize> {
        let len = self.blocks.len();
        let mut indices: Vec<usize> = (0..len.min(SAMPLE_BLOCKS)).collect();
        for i in len.saturating_sub(SAMPLE_BLOCKS)..len {
            if !indices.contains(&i) {
                indices.push(i);
            }
        }
        indices
    }

    /// Log totals, size and a sample of the first and last blocks.
    pub fn log_report(&self, path: &Path) {
        log::info!(
            "{} caractères générés dans {} blocs.",
            self.total_characters,
            self.blocks.len()
        );
        log::info!("{:.2} MB écrits dans {}", self.megabytes(), path.display());
        for i in self.sample_indices() {
            let block = &self.blocks[i];
            log::info!("{} ({} chars) :", block.name, block.count);
            for rec in &block.sample {
                log::info!("  {}: {}", rec.code_point, rec.character);
            }
        }
    }
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Impossible de créer {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("Impossible de créer {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn finish(mut out: BufWriter<File>, path: &Path, summary: &mut CatalogSummary) -> Result<()> {
    out.flush()
        .with_context(|| format!("Écriture incomplète de {}", path.display()))?;
    summary.bytes = std::fs::metadata(path)
        .with_context(|| format!("Impossible de lire la taille de {}", path.display()))?
        .len();
    Ok(())
}

/// Écrit un catalogue déjà matérialisé, JSON indenté sur deux espaces.
///
/// Non-ASCII characters are written literally.
///
/// # Errors
/// Any I/O or serialization failure aborts the write. A partial file may remain.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<CatalogSummary> {
    let mut out = create_output(path)?;
    serde_json::to_writer_pretty(&mut out, catalog)
        .with_context(|| format!("Erreur d'écriture JSON dans {}", path.display()))?;

    let mut summary = CatalogSummary::default();
    for (name, entry) in catalog.iter() {
        summary.record(name, entry);
    }
    finish(out, path, &mut summary)?;
    Ok(summary)
}

/// Enumerate and write block by block.
///
/// Produces the same bytes as [`write_catalog`] on the materialised catalog
/// while holding at most one block in memory.
///
/// # Errors
/// Any I/O or serialization failure aborts the write. A partial file may remain.
pub fn stream_catalog(path: &Path, blocks: &BlockTable) -> Result<CatalogSummary> {
    let mut out = create_output(path)?;
    let mut summary = CatalogSummary::default();

    {
        let context = || format!("Erreur d'écriture JSON dans {}", path.display());
        let mut ser = serde_json::Serializer::pretty(&mut out);
        let mut map = (&mut ser)
            .serialize_map(Some(blocks.len()))
            .with_context(context)?;
        for (name, block) in blocks {
            let entry = enumerate_block(block);
            map.serialize_entry(name, &entry).with_context(context)?;
            summary.record(name, &entry);
        }
        map.end().with_context(context)?;
    }

    finish(out, path, &mut summary)?;
    Ok(summary)
}
