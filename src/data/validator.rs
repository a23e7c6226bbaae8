//! Data Validator Module
//! Turns raw text lines into records, reporting the first rule a file breaks.

use super::model::{Dataset, Key, KeyMode, Record};
use thiserror::Error;

/// Prefix of the optional first line that overrides the x-axis label.
pub const XLABEL_PREFIX: &str = "xlabel:";

/// Minimum number of data lines after the header is removed.
pub const MIN_DATA_LINES: usize = 2;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("input file should contain at least 2 data lines, found {found}")]
    InsufficientData { found: usize },
    #[error("line {line}: expected two values separated by a comma, got {content:?}")]
    MissingDelimiter { line: usize, content: String },
    #[error("line {line}: {field:?} is not a number")]
    NonNumericValue { line: usize, field: String },
}

/// A data line with its 1-based position in the source text.
#[derive(Debug, Clone, Copy)]
struct NumberedLine<'a> {
    number: usize,
    text: &'a str,
}

/// Parse and validate a whole file's text.
///
/// Strips a leading byte-order mark, drops blank lines, removes an
/// `xlabel:` header and then applies [`validate_lines`].
pub fn parse_dataset(text: &str, mode: KeyMode) -> Result<Dataset, ValidationError> {
    let text = match text.strip_prefix('\u{feff}') {
        Some(rest) => {
            log::debug!("Stripped byte-order mark");
            rest
        }
        None => text,
    };

    let mut lines: Vec<NumberedLine<'_>> = text
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| NumberedLine {
            number: i + 1,
            text: l,
        })
        .collect();

    let blank = text.lines().count() - lines.len();
    if blank > 0 {
        log::warn!("Ignoring {blank} blank line(s)");
    }

    let x_label = match lines.first() {
        Some(first) if first.text.starts_with(XLABEL_PREFIX) => {
            let label = split_header(first.text);
            lines.remove(0);
            Some(label)
        }
        _ => None,
    };

    let records = validate_numbered(&lines, mode)?;
    log::debug!(
        "Parsed {} records (x label override: {:?})",
        records.len(),
        x_label
    );
    Ok(Dataset::new(records, x_label))
}

/// Validate header-free lines, numbering them from 1.
pub fn validate_lines<S: AsRef<str>>(
    lines: &[S],
    mode: KeyMode,
) -> Result<Vec<Record>, ValidationError> {
    let numbered: Vec<NumberedLine<'_>> = lines
        .iter()
        .enumerate()
        .map(|(i, l)| NumberedLine {
            number: i + 1,
            text: l.as_ref(),
        })
        .collect();
    validate_numbered(&numbered, mode)
}

/// Apply the rules in order: line count, delimiter, then field parsing.
fn validate_numbered(
    lines: &[NumberedLine<'_>],
    mode: KeyMode,
) -> Result<Vec<Record>, ValidationError> {
    if lines.len() < MIN_DATA_LINES {
        return Err(ValidationError::InsufficientData { found: lines.len() });
    }

    if let Some(bad) = lines.iter().find(|l| !l.text.contains(',')) {
        return Err(ValidationError::MissingDelimiter {
            line: bad.number,
            content: bad.text.to_string(),
        });
    }

    lines.iter().map(|l| parse_record(l, mode)).collect()
}

fn parse_record(line: &NumberedLine<'_>, mode: KeyMode) -> Result<Record, ValidationError> {
    let fields: Vec<&str> = line.text.split(',').collect();
    let &[key, value] = fields.as_slice() else {
        return Err(ValidationError::NonNumericValue {
            line: line.number,
            field: line.text.to_string(),
        });
    };

    let key = match mode {
        KeyMode::Numeric => Key::number(parse_number(key, line.number)?, key.trim()),
        KeyMode::Label => Key::Label(key.trim().to_string()),
    };
    let value = parse_number(value, line.number)?;

    Ok(Record { key, value })
}

/// Finite floats only; `nan` and `inf` cannot be plotted.
fn parse_number(field: &str, line: usize) -> Result<f64, ValidationError> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::NonNumericValue {
            line,
            field: field.to_string(),
        })
}

/// Everything after the first colon.
fn split_header(line: &str) -> String {
    line.split_once(':')
        .map(|(_, rest)| rest.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_lines() {
        let records = validate_lines(&["1,2", "2,4", "3,6"], KeyMode::Numeric).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].key, Key::number(3.0, "3"));
        assert_eq!(records[2].value, 6.0);
    }

    #[test]
    fn test_insufficient_data() {
        assert_eq!(
            validate_lines(&["1,2"], KeyMode::Numeric),
            Err(ValidationError::InsufficientData { found: 1 })
        );
        let empty: [&str; 0] = [];
        assert_eq!(
            validate_lines(&empty, KeyMode::Label),
            Err(ValidationError::InsufficientData { found: 0 })
        );
    }

    #[test]
    fn test_missing_delimiter() {
        assert_eq!(
            validate_lines(&["1,2", "34"], KeyMode::Numeric),
            Err(ValidationError::MissingDelimiter {
                line: 2,
                content: "34".into()
            })
        );
    }

    #[test]
    fn test_non_numeric_value() {
        assert_eq!(
            validate_lines(&["1,2", "3,abc"], KeyMode::Numeric),
            Err(ValidationError::NonNumericValue {
                line: 2,
                field: "abc".into()
            })
        );
    }

    #[test]
    fn test_delimiter_checked_before_numbers() {
        let err = validate_lines(&["x,2", "34"], KeyMode::Numeric).unwrap_err();
        assert!(matches!(err, ValidationError::MissingDelimiter { line: 2, .. }));
    }

    #[test]
    fn test_too_many_fields() {
        let err = validate_lines(&["1,2", "1,2,3"], KeyMode::Numeric).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonNumericValue {
                line: 2,
                field: "1,2,3".into()
            }
        );
    }

    #[test]
    fn test_label_mode_keeps_text_keys() {
        let records = validate_lines(&["apples, 3", "pears,4.5"], KeyMode::Label).unwrap();
        assert_eq!(records[0].key, Key::Label("apples".into()));
        assert_eq!(records[0].value, 3.0);
        assert_eq!(records[1].value, 4.5);

        let err = validate_lines(&["apples,3", "pears,4"], KeyMode::Numeric).unwrap_err();
        assert!(matches!(err, ValidationError::NonNumericValue { line: 1, .. }));
    }

    #[test]
    fn test_label_mode_still_needs_numeric_value() {
        let err = validate_lines(&["a,1", "b,many"], KeyMode::Label).unwrap_err();
        assert!(matches!(err, ValidationError::NonNumericValue { line: 2, .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(validate_lines(&["1,nan", "2,3"], KeyMode::Numeric).is_err());
        assert!(validate_lines(&["1,2", "inf,3"], KeyMode::Numeric).is_err());
    }

    #[test]
    fn test_numeric_keys_keep_source_text() {
        let ds = parse_dataset("1.50,2\n 01 ,3\n", KeyMode::Numeric).unwrap();
        assert_eq!(ds.labels(), vec!["1.50", "01"]);
        assert_eq!(ds.records[0].key.as_f64(), Some(1.5));
        assert_eq!(ds.records[1].key.as_f64(), Some(1.0));
    }

    #[test]
    fn test_whitespace_around_fields() {
        let records = validate_lines(&[" 1 , 2 ", "2,\t4"], KeyMode::Numeric).unwrap();
        assert_eq!(records[0].value, 2.0);
        assert_eq!(records[1].value, 4.0);
    }

    #[test]
    fn test_parse_dataset_with_header() {
        let ds = parse_dataset("xlabel:Time (s)\n1,2\n2,4\n", KeyMode::Numeric).unwrap();
        assert_eq!(ds.x_label.as_deref(), Some("Time (s)"));
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn test_header_keeps_text_after_first_colon() {
        let ds = parse_dataset("xlabel:a:b\n1,2\n2,4", KeyMode::Numeric).unwrap();
        assert_eq!(ds.x_label.as_deref(), Some("a:b"));
    }

    #[test]
    fn test_header_not_counted_as_data() {
        let err = parse_dataset("xlabel:X\n1,2\n", KeyMode::Numeric).unwrap_err();
        assert_eq!(err, ValidationError::InsufficientData { found: 1 });
    }

    #[test]
    fn test_parse_dataset_line_numbers_include_header() {
        let err = parse_dataset("xlabel:X\n1,2\n3,abc\n", KeyMode::Numeric).unwrap_err();
        assert!(matches!(err, ValidationError::NonNumericValue { line: 3, .. }));
    }

    #[test]
    fn test_bom_and_crlf() {
        let plain = parse_dataset("1,2\n2,4\n", KeyMode::Numeric).unwrap();
        let bom = parse_dataset("\u{feff}1,2\r\n2,4\r\n", KeyMode::Numeric).unwrap();
        assert_eq!(plain, bom);
    }

    #[test]
    fn test_blank_lines_dropped() {
        let ds = parse_dataset("1,2\n\n2,4\n   \n3,6\n", KeyMode::Numeric).unwrap();
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::MissingDelimiter {
            line: 2,
            content: "34".into(),
        };
        assert_eq!(
            err.to_string(),
            "line 2: expected two values separated by a comma, got \"34\""
        );
        assert_eq!(
            ValidationError::InsufficientData { found: 1 }.to_string(),
            "input file should contain at least 2 data lines, found 1"
        );
    }
}
