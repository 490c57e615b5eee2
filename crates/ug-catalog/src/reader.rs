use std::path::Path;

use anyhow::{Context, Result};
use ug_core::record::Catalog;

/// Relit un catalogue JSON et vérifie la cohérence de chaque enregistrement.
///
/// Unknown fields are rejected.
///
/// # Errors
/// Returns an error if the file cannot be read, is not a catalog, or holds an
/// inconsistent record.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let catalog: Catalog = serde_json::from_str(&text)
        .with_context(|| format!("Catalogue JSON invalide : {}", path.display()))?;
    catalog
        .validate()
        .with_context(|| format!("Catalogue incohérent : {}", path.display()))?;
    log::info!(
        "{} caractères dans {} blocs lus depuis {}",
        catalog.total_characters(),
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::embedded_blocks;
    use crate::enumerate::enumerate_catalog;
    use crate::writer::stream_catalog;
    use ug_core::CoreError;

    #[test]
    fn reads_back_what_was_streamed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unicode_icons.json");
        let table = embedded_blocks();
        stream_catalog(&path, &table).unwrap();
        assert_eq!(read_catalog(&path).unwrap(), enumerate_catalog(&table));
    }

    #[test]
    fn rejects_inconsistent_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"X": {"description": "d", "characters": [
                {"code_point": "U+0041", "character": "B", "decimal": 65, "hex": "0x41"}
            ]}}"#,
        )
        .unwrap();
        let err = read_catalog(&path).unwrap_err();
        assert!(err.downcast_ref::<CoreError>().is_some());
    }

    #[test]
    fn rejects_unknown_block_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.json");
        std::fs::write(
            &path,
            r#"{"X": {"description": "d", "characters": [], "range": [0, 1]}}"#,
        )
        .unwrap();
        assert!(read_catalog(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_catalog(&dir.path().join("nope.json")).is_err());
    }
}
