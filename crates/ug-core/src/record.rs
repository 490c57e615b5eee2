use std::ops::RangeInclusive;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Highest valid Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x0010_FFFF;

/// A named, contiguous range of code points.
///
/// # Example
/// ```
/// use ug_core::record::Block;
/// let block = Block::new("Basic Latin", 0x00, 0x7F, "ASCII and control characters");
/// assert_eq!(block.len(), 128);
/// assert!(block.range().contains(&0x41));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// Block name as it appears in the definition table.
    pub name: String,
    /// First code point (inclusive).
    pub start: u32,
    /// Last code point (inclusive). Always `>= start`.
    pub end: u32,
    /// Human readable description.
    pub description: String,
}

impl Block {
    /// Build a block. Callers guarantee `start <= end`.
    #[must_use]
    pub fn new(name: &str, start: u32, end: u32, description: &str) -> Self {
        debug_assert!(start <= end, "block {name}: {start:#x} > {end:#x}");
        Self {
            name: name.to_string(),
            start,
            end,
            description: description.to_string(),
        }
    }

    /// Inclusive code point range of the block.
    #[must_use]
    pub fn range(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    /// Number of code points covered, assigned or not.
    #[must_use]
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// A block always covers at least one code point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Block name → block, in definition order.
pub type BlockTable = IndexMap<String, Block>;

/// One printable character of the catalog.
///
/// # Example
/// ```
/// use ug_core::record::CharacterRecord;
/// let rec = CharacterRecord::new('é');
/// assert_eq!(rec.code_point, "U+00E9");
/// assert_eq!(rec.hex, "0xe9");
/// assert_eq!(rec.decimal, 233);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharacterRecord {
    /// `U+` followed by at least four uppercase hex digits.
    pub code_point: String,
    /// The character itself.
    pub character: char,
    /// Scalar value.
    pub decimal: u32,
    /// Lowercase `0x`-prefixed hex.
    pub hex: String,
}

impl CharacterRecord {
    /// Describe `ch` in all three numeric forms.
    #[must_use]
    pub fn new(ch: char) -> Self {
        let cp = u32::from(ch);
        Self {
            code_point: format!("U+{cp:04X}"),
            character: ch,
            decimal: cp,
            hex: format!("{cp:#x}"),
        }
    }

    /// Check that every field describes the same scalar value.
    ///
    /// # Errors
    /// Returns `CoreError::InconsistentRecord` naming the first field that disagrees.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fail = |reason: &str| CoreError::InconsistentRecord {
            code_point: self.code_point.clone(),
            reason: reason.to_string(),
        };

        if u32::from(self.character) != self.decimal {
            return Err(fail("character ≠ decimal"));
        }
        let hex = self
            .hex
            .strip_prefix("0x")
            .and_then(|h| u32::from_str_radix(h, 16).ok());
        if hex != Some(self.decimal) {
            return Err(fail("hex ≠ decimal"));
        }
        let cp = self
            .code_point
            .strip_prefix("U+")
            .filter(|h| h.len() >= 4)
            .and_then(|h| u32::from_str_radix(h, 16).ok());
        if cp != Some(self.decimal) {
            return Err(fail("code_point ≠ decimal"));
        }
        Ok(())
    }
}

/// Catalog entry for one block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogBlock {
    /// Block description carried over from the definition table.
    pub description: String,
    /// Printable characters in ascending code point order.
    pub characters: Vec<CharacterRecord>,
}

/// Ordered mapping block name → printable characters.
///
/// Serializes as a JSON object whose keys keep insertion order.
///
/// # Example
/// ```
/// use ug_core::record::{Catalog, CatalogBlock, CharacterRecord};
/// let mut catalog = Catalog::default();
/// catalog.insert("Test", CatalogBlock {
///     description: "Unicode block: Test".into(),
///     characters: vec![CharacterRecord::new('A')],
/// });
/// assert_eq!(catalog.total_characters(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    blocks: IndexMap<String, CatalogBlock>,
}

impl Catalog {
    /// Append (or replace in place) a block.
    pub fn insert(&mut self, name: &str, block: CatalogBlock) {
        self.blocks.insert(name.to_string(), block);
    }

    /// Look up a block by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CatalogBlock> {
        self.blocks.get(name)
    }

    /// Blocks in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogBlock)> {
        self.blocks.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Block names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    /// Number of blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Sum of characters over all blocks.
    #[must_use]
    pub fn total_characters(&self) -> usize {
        self.blocks.values().map(|b| b.characters.len()).sum()
    }

    /// Validate every record of every block.
    ///
    /// # Errors
    /// Returns the first inconsistent record found.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.blocks
            .values()
            .flat_map(|b| b.characters.iter())
            .try_for_each(CharacterRecord::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_point_is_padded_to_four_digits() {
        assert_eq!(CharacterRecord::new('A').code_point, "U+0041");
        assert_eq!(CharacterRecord::new('\u{1F600}').code_point, "U+1F600");
        assert_eq!(CharacterRecord::new('\u{10FFFD}').code_point, "U+10FFFD");
    }

    #[test]
    fn hex_is_lowercase_and_unpadded() {
        assert_eq!(CharacterRecord::new('A').hex, "0x41");
        assert_eq!(CharacterRecord::new('\u{AC00}').hex, "0xac00");
    }

    #[test]
    fn numeric_forms_agree_across_planes() {
        for cp in (0..=MAX_CODE_POINT).step_by(4099) {
            let Some(ch) = char::from_u32(cp) else {
                continue;
            };
            let rec = CharacterRecord::new(ch);
            assert_eq!(rec.decimal, cp);
            assert!(rec.validate().is_ok(), "{rec:?}");
        }
    }

    #[test]
    fn validate_rejects_mismatched_hex() {
        let mut rec = CharacterRecord::new('B');
        rec.hex = "0x41".into();
        assert!(matches!(
            rec.validate(),
            Err(CoreError::InconsistentRecord { .. })
        ));
    }

    #[test]
    fn record_json_shape() {
        let json = serde_json::to_string(&CharacterRecord::new('→')).unwrap();
        assert_eq!(
            json,
            r#"{"code_point":"U+2192","character":"→","decimal":8594,"hex":"0x2192"}"#
        );
    }

    #[test]
    fn unknown_record_fields_are_rejected() {
        let json = r#"{"code_point":"U+0041","character":"A","decimal":65,"hex":"0x41","name":"x"}"#;
        assert!(serde_json::from_str::<CharacterRecord>(json).is_err());
    }

    #[test]
    fn catalog_keeps_insertion_order() {
        let mut catalog = Catalog::default();
        for name in ["Zeta", "Alpha", "Mu"] {
            catalog.insert(name, CatalogBlock::default());
        }
        let json = serde_json::to_string(&catalog).unwrap();
        let zeta = json.find("Zeta").unwrap();
        let alpha = json.find("Alpha").unwrap();
        let mu = json.find("Mu").unwrap();
        assert!(zeta < alpha && alpha < mu);
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["Zeta", "Alpha", "Mu"]);
    }
}
