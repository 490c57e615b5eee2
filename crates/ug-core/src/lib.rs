/// Shared types and configuration for uniglyph.
///
/// This crate holds the catalog data model, the theme palette and the
/// render style configuration used by both batch jobs.

pub mod config;
pub mod error;
pub mod record;
pub mod theme;

pub use config::StyleConfig;
pub use error::CoreError;
pub use record::{Block, BlockTable, Catalog, CatalogBlock, CharacterRecord};
pub use theme::{ColorPair, Palette};
