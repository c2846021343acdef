//! Delimited text (CSV/TSV) writer.

use std::borrow::Cow;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result, write_bom};
use crate::sheet::types::Line;

/// Sequence appended after every encoded line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTerminator {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
}

impl LineTerminator {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::Crlf => "\r\n",
        }
    }
}

/// Configuration for encoding lines as delimited text.
///
/// The delimiter and quote must be ASCII bytes; see [`DelimitedConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelimitedConfig {
    /// Field delimiter
    pub delimiter: u8,
    /// Quote character wrapped around fields that need it
    pub quote: u8,
    /// Terminator appended after every line, including the last
    pub terminator: LineTerminator,
    /// Prefix the output with a UTF-8 BOM
    pub write_bom: bool,
}

impl Default for DelimitedConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            terminator: LineTerminator::Lf,
            write_bom: false,
        }
    }
}

impl DelimitedConfig {
    pub fn csv() -> Self {
        Self::default()
    }

    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    /// Set the field delimiter. Must be ASCII.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        debug_assert!(delimiter.is_ascii(), "delimiter must be ASCII");
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character. Must be ASCII.
    pub fn with_quote(mut self, quote: u8) -> Self {
        debug_assert!(quote.is_ascii(), "quote must be ASCII");
        self.quote = quote;
        self
    }

    pub fn with_terminator(mut self, terminator: LineTerminator) -> Self {
        self.terminator = terminator;
        self
    }

    pub fn with_write_bom(mut self, write_bom: bool) -> Self {
        self.write_bom = write_bom;
        self
    }

    /// Check that the delimiter and quote are usable.
    ///
    /// Both are emitted as single characters but searched for as single
    /// bytes, which only agree for ASCII.
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(Error::Config(format!(
                "Delimiter must be ASCII, got byte 0x{:02X}",
                self.delimiter
            )));
        }
        if !self.quote.is_ascii() {
            return Err(Error::Config(format!(
                "Quote must be ASCII, got byte 0x{:02X}",
                self.quote
            )));
        }
        if self.delimiter == self.quote {
            return Err(Error::Config("Delimiter and quote must differ".to_string()));
        }
        Ok(())
    }

    /// Load a configuration from YAML. Missing keys keep their defaults.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse delimited config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to YAML.
    #[cfg(feature = "yaml")]
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize delimited config: {}", e)))
    }
}

/// Escape a single field.
///
/// The field is quoted only when it contains the delimiter, the quote
/// character, `\r` or `\n`; embedded quotes are doubled.
pub fn escape_field<'a>(field: &'a str, config: &DelimitedConfig) -> Cow<'a, str> {
    let bytes = field.as_bytes();
    let needs_quote = memchr::memchr3(config.delimiter, config.quote, b'\n', bytes).is_some()
        || memchr::memchr(b'\r', bytes).is_some();

    if !needs_quote {
        return Cow::Borrowed(field);
    }

    let quote = char::from(config.quote);
    let mut quoted = String::with_capacity(field.len() + 2);
    quoted.push(quote);
    for ch in field.chars() {
        if ch == quote {
            quoted.push(quote);
        }
        quoted.push(ch);
    }
    quoted.push(quote);
    Cow::Owned(quoted)
}

/// Append one encoded line, terminator included, to `out`.
pub fn encode_line(line: &[String], config: &DelimitedConfig, out: &mut String) {
    for (col_idx, cell) in line.iter().enumerate() {
        if col_idx > 0 {
            out.push(char::from(config.delimiter));
        }
        out.push_str(&escape_field(cell, config));
    }
    out.push_str(config.terminator.as_str());
}

/// Write `lines` to `writer` one line at a time.
///
/// Stops at the first line the writer rejects and reports it as
/// [`Error::WriteFailure`] with its 1-based line number; nothing after that
/// line is attempted. Returns the number of bytes written.
pub fn write_delimited<W: Write + ?Sized>(
    lines: &[Line],
    writer: &mut W,
    config: &DelimitedConfig,
) -> Result<usize> {
    let mut written = 0;

    if config.write_bom {
        write_bom(writer).map_err(Error::Transmit)?;
        written += crate::common::UTF8_BOM.len();
    }

    let mut buf = String::new();
    for (row_idx, line) in lines.iter().enumerate() {
        buf.clear();
        encode_line(line, config, &mut buf);

        if let Err(source) = writer.write_all(buf.as_bytes()) {
            let number = row_idx + 1;
            tracing::warn!("Writer rejected line {} of {}: {}", number, lines.len(), source);
            return Err(Error::WriteFailure {
                line: number,
                content: line.join(&char::from(config.delimiter).to_string()),
                source,
            });
        }
        written += buf.len();
    }

    tracing::debug!("Encoded {} lines ({} bytes)", lines.len(), written);
    Ok(written)
}

/// Encode `lines` into a string.
pub fn to_delimited_string(lines: &[Line], config: &DelimitedConfig) -> String {
    let mut out = String::new();
    if config.write_bom {
        out.push('\u{FEFF}');
    }
    for line in lines {
        encode_line(line, config, &mut out);
    }
    out
}
