use ug_core::record::{Block, BlockTable, Catalog, CatalogBlock, CharacterRecord};
use unicode_general_category::{GeneralCategory, get_general_category};

/// Block-local noncharacters excluded even if a future table marks them printable.
const EXCLUDED: [u32; 2] = [0xFFFE, 0xFFFF];

/// Printable = not in an "Other" or "Separator" category, ASCII space excepted.
///
/// # Example
/// ```
/// use ug_catalog::enumerate::is_printable;
/// assert!(is_printable('A'));
/// assert!(is_printable(' '));
/// assert!(!is_printable('\n'));
/// assert!(!is_printable('\u{00A0}'));
/// ```
#[inline]
#[must_use]
pub fn is_printable(ch: char) -> bool {
    match get_general_category(ch) {
        GeneralCategory::Control
        | GeneralCategory::Format
        | GeneralCategory::Surrogate
        | GeneralCategory::PrivateUse
        | GeneralCategory::Unassigned
        | GeneralCategory::LineSeparator
        | GeneralCategory::ParagraphSeparator => false,
        GeneralCategory::SpaceSeparator => ch == ' ',
        _ => true,
    }
}

/// Scalar values of `block` worth drawing, in ascending order.
///
/// Surrogates and out-of-range values fail `char::from_u32` and are skipped
/// silently.
pub fn printable_chars(block: &Block) -> impl Iterator<Item = char> + use<> {
    block
        .range()
        .filter(|cp| !EXCLUDED.contains(cp))
        .filter_map(char::from_u32)
        .filter(|&ch| is_printable(ch))
}

/// Enumerate a single block in one linear pass.
#[must_use]
pub fn enumerate_block(block: &Block) -> CatalogBlock {
    let characters: Vec<CharacterRecord> =
        printable_chars(block).map(CharacterRecord::new).collect();
    log::debug!(
        "{} : {} / {} code points retenus",
        block.name,
        characters.len(),
        block.len()
    );
    CatalogBlock {
        description: block.description.clone(),
        characters,
    }
}

/// Materialise the whole catalog, blocks in table order.
#[must_use]
pub fn enumerate_catalog(blocks: &BlockTable) -> Catalog {
    let mut catalog = Catalog::default();
    for (name, block) in blocks {
        catalog.insert(name, enumerate_block(block));
    }
    catalog
}
