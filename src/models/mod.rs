pub mod glyph;
pub mod sample;

pub use glyph::{CHART_HEIGHT, GlyphColumn};
pub use sample::Sample;
