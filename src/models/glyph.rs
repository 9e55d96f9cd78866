//! Fixed-height glyph columns used to build the chart.

/// Number of rows in every column of the chart.
pub const CHART_HEIGHT: usize = 11;

pub const BLANK: char = ' ';
pub const GLYPH_UNITS: char = '#';
pub const GLYPH_TENTHS: char = '=';
pub const GLYPH_HUNDREDTHS: char = '-';

/// One visual column of the chart, row 0 on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphColumn {
    cells: [char; CHART_HEIGHT],
}

impl GlyphColumn {
    pub fn blank() -> Self {
        Self {
            cells: [BLANK; CHART_HEIGHT],
        }
    }

    /// Builds a column whose content sits on the baseline (row 10).
    ///
    /// `content` is top-padded with blanks; anything taller than the
    /// chart keeps only its last `CHART_HEIGHT` cells.
    pub fn from_content(content: &[char]) -> Self {
        let mut column = Self::blank();
        let content = &content[content.len().saturating_sub(CHART_HEIGHT)..];
        let offset = CHART_HEIGHT - content.len();
        column.cells[offset..].copy_from_slice(content);
        column
    }

    pub fn cell(&self, row: usize) -> char {
        self.cells[row]
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Number of non-blank cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| **c != BLANK).count()
    }
}

impl Default for GlyphColumn {
    fn default() -> Self {
        Self::blank()
    }
}
