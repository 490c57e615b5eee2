/// Unicode catalog construction for uniglyph.
///
/// Loads block definitions, enumerates the printable code points of each
/// block and persists the result as a JSON catalog.

pub mod blocks;
pub mod enumerate;
pub mod error;
pub mod reader;
pub mod writer;

pub use blocks::{BlockSource, LoadedBlocks, load_blocks};
pub use enumerate::{enumerate_block, enumerate_catalog, is_printable};
pub use error::CatalogError;
pub use reader::read_catalog;
pub use writer::{CatalogSummary, stream_catalog, write_catalog};
