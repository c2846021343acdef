//! Tests for the delimited text writer

use super::*;
use crate::common::{Error, UTF8_BOM, strip_bom};
use crate::sheet::types::Line;
use std::io::{self, Write};

fn line(cells: &[&str]) -> Line {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Accepts `limit` writes, then fails every write after that.
struct FailingWriter {
    accepted: Vec<u8>,
    writes: usize,
    limit: usize,
}

impl FailingWriter {
    fn new(limit: usize) -> Self {
        Self {
            accepted: Vec::new(),
            writes: 0,
            limit,
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.writes >= self.limit {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.writes += 1;
        self.accepted.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_escape_plain_field_is_borrowed() {
    let config = DelimitedConfig::csv();
    assert!(matches!(
        escape_field("plain", &config),
        std::borrow::Cow::Borrowed("plain")
    ));
    assert_eq!(escape_field("", &config), "");
}

#[test]
fn test_escape_special_characters() {
    let config = DelimitedConfig::csv();
    assert_eq!(escape_field("a,b", &config), "\"a,b\"");
    assert_eq!(escape_field("c\"d", &config), "\"c\"\"d\"");
    assert_eq!(escape_field("line\nbreak", &config), "\"line\nbreak\"");
    assert_eq!(escape_field("cr\rhere", &config), "\"cr\rhere\"");
}

#[test]
fn test_spaces_and_tabs_are_not_quoted() {
    let config = DelimitedConfig::csv();
    assert_eq!(escape_field("--- X ---", &config), "--- X ---");
    assert_eq!(escape_field("a\tb", &config), "a\tb");
}

#[test]
fn test_tsv_quotes_tabs_not_commas() {
    let config = DelimitedConfig::tsv();
    assert_eq!(escape_field("a\tb", &config), "\"a\tb\"");
    assert_eq!(escape_field("a,b", &config), "a,b");
}

#[test]
fn test_encode_line_example() {
    let mut out = String::new();
    encode_line(&line(&["a,b", "c\"d", "plain"]), &DelimitedConfig::csv(), &mut out);
    assert_eq!(out, "\"a,b\",\"c\"\"d\",plain\n");
}

#[test]
fn test_empty_line_is_terminator_only() {
    let mut out = String::new();
    encode_line(&[], &DelimitedConfig::csv(), &mut out);
    assert_eq!(out, "\n");

    out.clear();
    let crlf = DelimitedConfig::csv().with_terminator(LineTerminator::Crlf);
    encode_line(&[], &crlf, &mut out);
    assert_eq!(out, "\r\n");
}

#[test]
fn test_single_empty_cell_is_not_a_blank_line() {
    let csv = to_delimited_string(&[line(&["", "x"]), line(&[""])], &DelimitedConfig::csv());
    assert_eq!(csv, ",x\n\n");
}

#[test]
fn test_every_line_is_terminated() {
    let lines = vec![line(&["a"]), Line::new(), line(&["b", "c"])];
    let csv = to_delimited_string(&lines, &DelimitedConfig::csv());
    assert_eq!(csv, "a\n\nb,c\n");
}

#[test]
fn test_round_trip_with_csv_reader() {
    let original = line(&["a,b", "c\"d", "plain"]);
    let encoded = to_delimited_string(&[original.clone()], &DelimitedConfig::csv());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(encoded.as_bytes());
    let records: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().unwrap();

    assert_eq!(records.len(), 1);
    let decoded: Vec<String> = records[0].iter().map(String::from).collect();
    assert_eq!(decoded, original);
}

#[test]
fn test_write_delimited_matches_string_encoding() {
    let lines = vec![line(&["x", "y,z"]), Line::new(), line(&["1"])];
    let config = DelimitedConfig::csv();

    let mut out = Vec::new();
    let written = write_delimited(&lines, &mut out, &config).unwrap();

    assert_eq!(written, out.len());
    assert_eq!(String::from_utf8(out).unwrap(), to_delimited_string(&lines, &config));
}

#[test]
fn test_write_delimited_with_bom() {
    let config = DelimitedConfig::csv().with_write_bom(true);
    let mut out = Vec::new();
    write_delimited(&[line(&["a"])], &mut out, &config).unwrap();
    assert!(out.starts_with(&UTF8_BOM));
    assert_eq!(strip_bom(&out), b"a\n");

    let text = to_delimited_string(&[line(&["a"])], &config);
    assert_eq!(text.as_bytes(), out.as_slice());
}

#[test]
fn test_write_delimited_fails_fast() {
    let lines = vec![line(&["1"]), line(&["2", "two"]), line(&["3"]), line(&["4"])];
    let mut writer = FailingWriter::new(1);

    let err = write_delimited(&lines, &mut writer, &DelimitedConfig::csv()).unwrap_err();

    match err {
        Error::WriteFailure { line, content, .. } => {
            assert_eq!(line, 2);
            assert_eq!(content, "2,two");
        },
        other => panic!("Expected WriteFailure, got {other:?}"),
    }
    // Only line 1 got through and nothing after line 2 was attempted
    assert_eq!(writer.accepted, b"1\n");
    assert_eq!(writer.writes, 1);
}

#[cfg(feature = "yaml")]
#[test]
fn test_config_from_yaml() {
    let config = DelimitedConfig::from_yaml_str("terminator: crlf\nwrite_bom: true\n").unwrap();
    assert_eq!(config.delimiter, b',');
    assert_eq!(config.terminator, LineTerminator::Crlf);
    assert!(config.write_bom);

    let yaml = config.to_yaml_string().unwrap();
    assert_eq!(DelimitedConfig::from_yaml_str(&yaml).unwrap(), config);
}

#[cfg(feature = "yaml")]
#[test]
fn test_config_from_bad_yaml() {
    let err = DelimitedConfig::from_yaml_str("terminator: [").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_validate_rejects_non_ascii_delimiter() {
    let config = DelimitedConfig {
        delimiter: 0xC8,
        ..DelimitedConfig::csv()
    };
    assert!(matches!(config.validate(), Err(Error::Config(_))));

    let config = DelimitedConfig {
        quote: 0xAB,
        ..DelimitedConfig::csv()
    };
    assert!(matches!(config.validate(), Err(Error::Config(_))));
}

#[test]
fn test_validate_rejects_quote_as_delimiter() {
    let config = DelimitedConfig::csv().with_delimiter(b'"');
    assert!(matches!(config.validate(), Err(Error::Config(_))));
}

#[test]
fn test_validate_accepts_presets() {
    assert!(DelimitedConfig::csv().validate().is_ok());
    assert!(DelimitedConfig::tsv().validate().is_ok());
    assert!(DelimitedConfig::csv().with_delimiter(b';').validate().is_ok());
}

#[cfg(feature = "yaml")]
#[test]
fn test_config_from_yaml_rejects_non_ascii_delimiter() {
    let err = DelimitedConfig::from_yaml_str("delimiter: 200\n").unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    let err = DelimitedConfig::from_yaml_str("quote: 171\n").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_csv_reader_recovers_fields(
            fields in prop::collection::vec("[a-z ,\"\r\n]{0,8}", 1..6)
        ) {
            // A lone empty field encodes to a blank line, which readers skip
            prop_assume!(!(fields.len() == 1 && fields[0].is_empty()));

            let encoded = to_delimited_string(&[fields.clone()], &DelimitedConfig::csv());
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .from_reader(encoded.as_bytes());
            let records: Vec<csv::StringRecord> =
                reader.records().collect::<Result<_, _>>().unwrap();

            prop_assert_eq!(records.len(), 1);
            let decoded: Vec<String> = records[0].iter().map(String::from).collect();
            prop_assert_eq!(decoded, fields);
        }

        #[test]
        fn prop_unquoted_fields_are_verbatim(field in "[a-zA-Z0-9 _.-]{0,16}") {
            let config = DelimitedConfig::csv();
            prop_assert_eq!(&*escape_field(&field, &config), field.as_str());
        }
    }
}
