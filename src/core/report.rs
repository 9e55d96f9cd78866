//! Header, dividers and chart assembled into the final text block.

use crate::config::Config;

pub const TITLE: &str = "Actual rain forecast in millimeters";

pub struct Report {
    label: String,
    divider: String,
}

impl Report {
    pub fn new(label: &str, separator_char: &str, width: usize) -> Self {
        Self {
            label: label.to_string(),
            divider: separator_char.repeat(width),
        }
    }

    pub fn from_config(cfg: &Config, label: Option<&str>) -> Self {
        Self::new(
            label.unwrap_or(&cfg.label),
            &cfg.separator_char,
            cfg.separator_width,
        )
    }

    pub fn divider(&self) -> &str {
        &self.divider
    }

    pub fn render(&self, chart: &[String]) -> String {
        let mut out = String::new();

        out.push_str(&self.divider);
        out.push('\n');
        out.push_str(TITLE);
        out.push('\n');
        out.push_str(&format!("Precision: {}.\n", self.label));
        out.push_str(&self.divider);
        out.push('\n');

        for row in chart {
            out.push_str(row);
            out.push('\n');
        }

        out.push_str(&self.divider);
        out.push('\n');
        out
    }
}
