//! Forecast text → ordered, fixed-length sample sequence.
//!
//! Each line has the form `<code>|<HH:MM>`. Bad lines never abort parsing:
//! their slot keeps a default sample and a diagnostic is recorded.

use crate::errors::AppResult;
use crate::models::Sample;
use std::io::BufRead;
use std::num::IntErrorKind;
use thiserror::Error;

/// Samples in one forecast (two hours at five minute steps).
pub const EXPECTED_SAMPLES: usize = 24;

const DELIMITER: char = '|';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line is not valid UTF-8")]
    InvalidUtf8,

    #[error("missing '|' delimiter")]
    MissingDelimiter,

    #[error("too many '|' separated fields")]
    ExtraField,

    #[error("could not parse intensity code {0:?}")]
    InvalidCode(String),

    #[error("intensity code {0} does not fit in 0-255")]
    CodeOutOfRange(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("line {line}: {error}")]
    Line { line: usize, error: ParseError },

    #[error("expected {expected} samples, found {found}; missing slots render empty")]
    MissingSamples { expected: usize, found: usize },

    #[error("expected {expected} samples, found {found}; extra lines ignored")]
    ExtraSamples { expected: usize, found: usize },
}

/// Parsed forecast: always `EXPECTED_SAMPLES` samples, in input order.
#[derive(Debug, Clone, Default)]
pub struct Forecast {
    pub samples: Vec<Sample>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Forecast {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub struct SampleParser {
    expected: usize,
}

impl Default for SampleParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleParser {
    pub fn new() -> Self {
        Self {
            expected: EXPECTED_SAMPLES,
        }
    }

    /// Reads every line of `reader`, one slot per line.
    ///
    /// Only reader failures are errors; a line that is not UTF-8 degrades
    /// its own slot like any other malformed line.
    pub fn parse<R: BufRead>(&self, mut reader: R) -> AppResult<Forecast> {
        let mut forecast = Forecast::default();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
            let parsed = std::str::from_utf8(raw)
                .map_err(|_| ParseError::InvalidUtf8)
                .and_then(parse_line);

            match parsed {
                Ok(sample) => forecast.samples.push(sample),
                Err(error) => {
                    forecast.diagnostics.push(Diagnostic::Line {
                        line: line_no,
                        error,
                    });
                    forecast.samples.push(Sample::default());
                }
            }
        }

        self.normalize(&mut forecast);
        Ok(forecast)
    }

    pub fn parse_str(&self, input: &str) -> AppResult<Forecast> {
        self.parse(input.as_bytes())
    }

    fn normalize(&self, forecast: &mut Forecast) {
        let found = forecast.samples.len();

        if found < self.expected {
            forecast.diagnostics.push(Diagnostic::MissingSamples {
                expected: self.expected,
                found,
            });
            forecast.samples.resize(self.expected, Sample::default());
        } else if found > self.expected {
            forecast.diagnostics.push(Diagnostic::ExtraSamples {
                expected: self.expected,
                found,
            });
            forecast.samples.truncate(self.expected);
        }
    }
}

/// Parses a single `<code>|<HH:MM>` line.
///
/// The time field is passed through as-is.
pub fn parse_line(line: &str) -> Result<Sample, ParseError> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    let (code, time) = line
        .split_once(DELIMITER)
        .ok_or(ParseError::MissingDelimiter)?;
    if time.contains(DELIMITER) {
        return Err(ParseError::ExtraField);
    }

    Ok(Sample::new(time, parse_code(code)?))
}

fn parse_code(field: &str) -> Result<u8, ParseError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidCode(field.to_string()));
    }

    let value: u64 = field.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => ParseError::CodeOutOfRange(field.to_string()),
        _ => ParseError::InvalidCode(field.to_string()),
    })?;

    u8::try_from(value).map_err(|_| ParseError::CodeOutOfRange(field.to_string()))
}
