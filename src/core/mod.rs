pub mod parser;
pub mod renderer;
pub mod report;

pub use parser::{Diagnostic, EXPECTED_SAMPLES, Forecast, ParseError, SampleParser};
pub use renderer::{PrintBuffer, TimelineRenderer};
pub use report::Report;
