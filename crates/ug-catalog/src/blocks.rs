use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ug_core::record::{Block, BlockTable, MAX_CODE_POINT};

use crate::error::CatalogError;

/// Blocs bien connus, utilisés quand aucun fichier Blocks.txt n'est présent.
///
/// Non exhaustif : Unicode 15.1 définit 338 blocs.
pub const EMBEDDED_BLOCKS: &[(&str, u32, u32, &str)] = &[
    ("Basic Latin", 0x0000, 0x007F, "ASCII and control characters"),
    ("Latin-1 Supplement", 0x0080, 0x00FF, "Additional Latin characters"),
    ("Latin Extended-A", 0x0100, 0x017F, "Extended Latin characters"),
    ("CJK Unified Ideographs", 0x4E00, 0x9FFF, "Chinese, Japanese, Korean ideographs"),
    ("Hangul Syllables", 0xAC00, 0xD7AF, "Korean syllables"),
    ("Emoticons", 0x1F600, 0x1F64F, "Emoji faces"),
    ("Kaktovik Numerals", 0x1D2C0, 0x1D2DF, "Inupiaq numerals"),
];

/// Where a block table came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockSource {
    /// Parsed from a definition file on disk.
    Parsed(PathBuf),
    /// The built-in fallback subset.
    Embedded,
}

/// Result of [`load_blocks`].
#[derive(Clone, Debug)]
pub struct LoadedBlocks {
    /// Blocks in file (or embedded) order.
    pub blocks: BlockTable,
    /// Provenance of `blocks`.
    pub source: BlockSource,
    /// Lines that were skipped, in file order.
    pub skipped: Vec<CatalogError>,
}

/// Build the embedded fallback table.
#[must_use]
pub fn embedded_blocks() -> BlockTable {
    EMBEDDED_BLOCKS
        .iter()
        .map(|&(name, start, end, desc)| (name.to_string(), Block::new(name, start, end, desc)))
        .collect()
}

/// Charge la table des blocs depuis `path`, ou la table embarquée si absent.
///
/// Malformed lines are skipped and reported in [`LoadedBlocks::skipped`].
///
/// # Errors
/// Returns an error only if the file exists but cannot be read.
pub fn load_blocks(path: &Path) -> Result<LoadedBlocks> {
    if !path.exists() {
        log::warn!(
            "{} introuvable. Utilisation du sous-ensemble embarqué (non exhaustif).",
            path.display()
        );
        return Ok(LoadedBlocks {
            blocks: embedded_blocks(),
            source: BlockSource::Embedded,
            skipped: Vec::new(),
        });
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let (blocks, skipped) = parse_blocks(&text);
    for err in &skipped {
        log::warn!("{}: {err}", path.display());
    }
    log::info!("{} blocs chargés depuis {}", blocks.len(), path.display());

    Ok(LoadedBlocks {
        blocks,
        source: BlockSource::Parsed(path.to_path_buf()),
        skipped,
    })
}

/// Parse the `START..END; Name` format.
///
/// Returns the table and one error per skipped line. A repeated name keeps
/// its first position and takes the later range.
#[must_use]
pub fn parse_blocks(text: &str) -> (BlockTable, Vec<CatalogError>) {
    let mut blocks = BlockTable::new();
    let mut skipped = Vec::new();

    for (idx, line) in text.trim_start_matches('\u{feff}').lines().enumerate() {
        match parse_line(line) {
            Ok(Some(block)) => {
                blocks.insert(block.name.clone(), block);
            }
            Ok(None) => {}
            Err(reason) => skipped.push(CatalogError::MalformedLine {
                line: idx + 1,
                content: line.to_string(),
                reason,
            }),
        }
    }

    (blocks, skipped)
}

/// Parse a single definition line.
///
/// `Ok(None)` for blank and `#` comment lines.
///
/// # Errors
/// Returns a short reason when the line is not a valid block definition.
pub fn parse_line(line: &str) -> Result<Option<Block>, &'static str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (range, name) = trimmed.split_once(';').ok_or("';' manquant")?;
    let name = name.trim();
    if name.is_empty() {
        return Err("nom vide");
    }

    let (start, end) = range.split_once("..").ok_or("'..' manquant")?;
    if end.contains("..") {
        return Err("intervalle ambigu");
    }
    let start = u32::from_str_radix(start.trim(), 16).map_err(|_| "début non hexadécimal")?;
    let end = u32::from_str_radix(end.trim(), 16).map_err(|_| "fin non hexadécimal")?;
    if start > end {
        return Err("début > fin");
    }
    if end > MAX_CODE_POINT {
        return Err("au-delà de U+10FFFF");
    }

    let description = format!("Unicode block: {name}");
    Ok(Some(Block::new(name, start, end, &description)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_definition() {
        let (blocks, skipped) = parse_blocks("0041..005A; Test Block\n");
        assert!(skipped.is_empty());
        let block = &blocks["Test Block"];
        assert_eq!((block.start, block.end), (0x41, 0x5A));
        assert_eq!(block.description, "Unicode block: Test Block");
    }

    #[test]
    fn ignores_comments_and_blanks() {
        let text = "# Blocks-15.1.0.txt\n\n# comment\n0000..007F; Basic Latin\n   \n# EOF\n";
        let (blocks, skipped) = parse_blocks(text);
        assert!(skipped.is_empty());
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn keeps_file_order() {
        let text = "1D2C0..1D2DF; Kaktovik Numerals\n0000..007F; Basic Latin\n0080..00FF; Latin-1 Supplement\n";
        let (blocks, _) = parse_blocks(text);
        let names: Vec<_> = blocks.keys().map(String::as_str).collect();
        assert_eq!(names, ["Kaktovik Numerals", "Basic Latin", "Latin-1 Supplement"]);
    }

    #[test]
    fn malformed_lines_are_skipped_not_fatal() {
        let text = "0000..007F; Basic Latin\n\
                    0080-00FF; No Dots\n\
                    0100..017F Latin Extended-A\n\
                    XYZ..017F; Bad Hex\n\
                    0200..0100; Reversed\n\
                    0000..110000; Too Far\n\
                    0180..024F; Latin Extended-B\n";
        let (blocks, skipped) = parse_blocks(text);
        assert_eq!(blocks.len(), 2);
        let lines: Vec<usize> = skipped
            .iter()
            .map(|e| match e {
                CatalogError::MalformedLine { line, .. } => *line,
            })
            .collect();
        assert_eq!(lines, [2, 3, 4, 5, 6]);
    }

    #[test]
    fn handles_crlf_and_bom() {
        let (blocks, skipped) = parse_blocks("\u{feff}0000..007F; Basic Latin\r\n");
        assert!(skipped.is_empty());
        assert!(blocks.contains_key("Basic Latin"));
    }

    #[test]
    fn missing_file_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_blocks(&dir.path().join("Blocks-15.1.0.txt")).unwrap();
        assert_eq!(loaded.source, BlockSource::Embedded);
        assert_eq!(loaded.blocks.len(), EMBEDDED_BLOCKS.len());
        assert_eq!(loaded.blocks["Basic Latin"].range(), 0x00..=0x7F);
        assert_eq!(
            loaded.blocks.keys().last().map(String::as_str),
            Some("Kaktovik Numerals")
        );
    }

    #[test]
    fn existing_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Blocks.txt");
        std::fs::write(&path, "0041..005A; Test Block\nbroken line\n").unwrap();
        let loaded = load_blocks(&path).unwrap();
        assert_eq!(loaded.source, BlockSource::Parsed(path));
        assert_eq!(loaded.blocks.len(), 1);
        assert_eq!(loaded.skipped.len(), 1);
    }
}
