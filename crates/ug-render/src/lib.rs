/// SVG icon rendering for uniglyph.
///
/// Turns single characters into small themed SVG files laid out as
/// `<root>/<category>/<theme>/<utf8-hex>[_<theme>].svg`.

pub mod error;
pub mod naming;
pub mod renderer;
pub mod sample;
pub mod svg;

pub use error::RenderError;
pub use renderer::{IconRenderer, RenderStats, VariantPaths};
pub use sample::sample_icons;
