mod common;
use common::{forecast_lines, forecast_text, join_lines};
use rraincast::core::parser::parse_line;
use rraincast::core::{Diagnostic, EXPECTED_SAMPLES, ParseError, SampleParser};
use rraincast::models::Sample;

#[test]
fn test_parse_line_valid() {
    assert_eq!(parse_line("077|10:15"), Ok(Sample::new("10:15", 77)));
    assert_eq!(parse_line("0|00:00"), Ok(Sample::new("00:00", 0)));
    assert_eq!(parse_line("255|23:55\r"), Ok(Sample::new("23:55", 255)));
}

#[test]
fn test_parse_line_invalid_code() {
    assert_eq!(
        parse_line("xyz|10:00"),
        Err(ParseError::InvalidCode("xyz".into()))
    );
    assert_eq!(parse_line("|10:00"), Err(ParseError::InvalidCode("".into())));
    assert_eq!(parse_line("-1|10:00"), Err(ParseError::InvalidCode("-1".into())));
    assert_eq!(parse_line("+5|10:00"), Err(ParseError::InvalidCode("+5".into())));
}

#[test]
fn test_parse_line_out_of_range_is_not_clamped() {
    assert_eq!(
        parse_line("256|10:00"),
        Err(ParseError::CodeOutOfRange("256".into()))
    );
    assert_eq!(
        parse_line("99999999999999999999999|10:00"),
        Err(ParseError::CodeOutOfRange("99999999999999999999999".into()))
    );
}

#[test]
fn test_parse_line_field_count() {
    assert_eq!(parse_line("077 10:00"), Err(ParseError::MissingDelimiter));
    assert_eq!(parse_line(""), Err(ParseError::MissingDelimiter));
    assert_eq!(parse_line("077|10:00|x"), Err(ParseError::ExtraField));
}

#[test]
fn test_parse_full_forecast_keeps_order() {
    let forecast = SampleParser::new()
        .parse_str(&forecast_text(10, 0, 77))
        .unwrap();

    assert!(forecast.is_clean());
    assert_eq!(forecast.samples.len(), EXPECTED_SAMPLES);
    assert_eq!(forecast.samples[0], Sample::new("10:00", 77));
    assert_eq!(forecast.samples[23], Sample::new("11:55", 77));
}

#[test]
fn test_parse_does_not_sort() {
    let mut lines = forecast_lines(10, 0, 10);
    lines.swap(0, 1);
    let forecast = SampleParser::new().parse_str(&join_lines(&lines)).unwrap();

    assert!(forecast.is_clean());
    assert_eq!(forecast.samples[0].time, "10:05");
    assert_eq!(forecast.samples[1].time, "10:00");
}

#[test]
fn test_malformed_line_does_not_abort() {
    let mut lines = forecast_lines(10, 0, 90);
    lines[0] = "xyz|10:00".to_string();
    let forecast = SampleParser::new().parse_str(&join_lines(&lines)).unwrap();

    assert_eq!(forecast.samples.len(), EXPECTED_SAMPLES);
    assert_eq!(forecast.samples[0], Sample::default());
    assert_eq!(forecast.samples[1], Sample::new("10:05", 90));
    assert_eq!(
        forecast.diagnostics,
        vec![Diagnostic::Line {
            line: 1,
            error: ParseError::InvalidCode("xyz".into())
        }]
    );
}

#[test]
fn test_short_input_is_padded() {
    let lines = forecast_lines(10, 0, 90);
    let forecast = SampleParser::new()
        .parse_str(&join_lines(&lines[..10]))
        .unwrap();

    assert_eq!(forecast.samples.len(), EXPECTED_SAMPLES);
    assert!(forecast.samples[10..].iter().all(|s| *s == Sample::default()));
    assert_eq!(
        forecast.diagnostics,
        vec![Diagnostic::MissingSamples {
            expected: 24,
            found: 10
        }]
    );
}

#[test]
fn test_empty_input_is_padded() {
    let forecast = SampleParser::new().parse_str("").unwrap();
    assert_eq!(forecast.samples.len(), EXPECTED_SAMPLES);
    assert_eq!(forecast.diagnostics.len(), 1);
}

#[test]
fn test_long_input_is_truncated() {
    let mut lines = forecast_lines(10, 0, 90);
    lines.push("100|12:00".to_string());
    lines.push("100|12:05".to_string());
    let forecast = SampleParser::new().parse_str(&join_lines(&lines)).unwrap();

    assert_eq!(forecast.samples.len(), EXPECTED_SAMPLES);
    assert_eq!(forecast.samples[23].time, "11:55");
    assert_eq!(
        forecast.diagnostics,
        vec![Diagnostic::ExtraSamples {
            expected: 24,
            found: 26
        }]
    );
}

#[test]
fn test_diagnostic_messages() {
    let d = Diagnostic::Line {
        line: 3,
        error: ParseError::CodeOutOfRange("300".into()),
    };
    assert_eq!(d.to_string(), "line 3: intensity code 300 does not fit in 0-255");
}

#[test]
fn test_non_utf8_line_degrades_its_slot() {
    let lines = forecast_lines(10, 0, 90);
    let mut bytes = b"\xff\xfe|10:00\n".to_vec();
    bytes.extend_from_slice(join_lines(&lines[1..]).as_bytes());

    let forecast = SampleParser::new().parse(&bytes[..]).unwrap();

    assert_eq!(forecast.samples.len(), EXPECTED_SAMPLES);
    assert_eq!(forecast.samples[0], Sample::default());
    assert_eq!(forecast.samples[1], Sample::new("10:05", 90));
    assert_eq!(
        forecast.diagnostics,
        vec![Diagnostic::Line {
            line: 1,
            error: ParseError::InvalidUtf8
        }]
    );
}

#[test]
fn test_last_line_without_newline_is_read() {
    let lines = forecast_lines(10, 0, 90);
    let forecast = SampleParser::new().parse_str(&lines.join("\n")).unwrap();

    assert!(forecast.is_clean());
    assert_eq!(forecast.samples[23], Sample::new("11:55", 90));
}
