//! Samples → column buffer → transposed chart rows.

use crate::models::glyph::{GLYPH_HUNDREDTHS, GLYPH_TENTHS, GLYPH_UNITS};
use crate::models::{CHART_HEIGHT, GlyphColumn, Sample};
use crate::utils::round;

/// Minute values that get a vertical time label.
const LABEL_MINUTES: [&str; 2] = ["00", "30"];

/// Fraction at which the tenths digit rounds up.
const ROUND_ON: f64 = 0.5;

/// Columns in insertion order, consumed once by `rows()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintBuffer {
    columns: Vec<GlyphColumn>,
}

impl PrintBuffer {
    pub fn push(&mut self, column: GlyphColumn) {
        self.columns.push(column);
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, idx: usize) -> Option<&GlyphColumn> {
        self.columns.get(idx)
    }

    /// Row-major view: row 0 first, each row the cells of every column.
    pub fn rows(&self) -> Vec<String> {
        (0..CHART_HEIGHT)
            .map(|row| self.columns.iter().map(|c| c.cell(row)).collect())
            .collect()
    }
}

pub struct TimelineRenderer;

impl TimelineRenderer {
    /// Builds the column buffer for `samples`, inserting time labels on ticks.
    pub fn build(samples: &[Sample]) -> PrintBuffer {
        let mut buffer = PrintBuffer::default();

        for sample in samples {
            if buffer.is_empty() || is_tick(sample) {
                buffer.push(GlyphColumn::blank());
                for column in label_columns(&sample.time) {
                    buffer.push(column);
                }
                buffer.push(GlyphColumn::blank());
            }
            buffer.push(bar_column(sample));
        }

        buffer
    }

    pub fn render(samples: &[Sample]) -> Vec<String> {
        Self::build(samples).rows()
    }
}

/// Rate rounded half-up to one decimal.
pub fn rounded_rate(sample: &Sample) -> f64 {
    round(sample.mmpu(), ROUND_ON, 1)
}

/// Glyphs for one sample, top of the bar first, before padding.
///
/// Row `i` gets `#` when the rate exceeds `i` mm/h, `=` when it exceeds
/// `i` tenths, `-` when it exceeds `i` hundredths, otherwise nothing.
pub fn bar_glyphs(mmu: f64) -> Vec<char> {
    let mut glyphs = Vec::with_capacity(CHART_HEIGHT);
    for i in 0..CHART_HEIGHT {
        let i = i as f64;
        if mmu > i {
            glyphs.push(GLYPH_UNITS);
        } else if mmu * 10.0 > i {
            glyphs.push(GLYPH_TENTHS);
        } else if mmu * 100.0 > i {
            glyphs.push(GLYPH_HUNDREDTHS);
        }
    }
    glyphs
}

pub fn bar_column(sample: &Sample) -> GlyphColumn {
    GlyphColumn::from_content(&bar_glyphs(rounded_rate(sample)))
}

/// One column per character of `time`, each character on the baseline.
///
/// The label therefore reads left to right along the bottom row, one
/// character per column, rather than stacked in a single column.
pub fn label_columns(time: &str) -> Vec<GlyphColumn> {
    time.chars()
        .map(|c| GlyphColumn::from_content(&[c]))
        .collect()
}

/// Half-hour samples carry a label.
pub fn is_tick(sample: &Sample) -> bool {
    sample
        .minutes()
        .is_some_and(|m| LABEL_MINUTES.iter().any(|l| *l == m))
}
