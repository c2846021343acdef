//! Encoding a finished sheet and delivering it as a CSV download.

use std::io::Write;

use super::buffer::Sheet;
use super::sink::Sink;
use super::text::{DelimitedConfig, to_delimited_string, write_delimited};
use crate::common::{Error, Result, generate_file_stem};

/// MIME type declared for exported sheets.
pub const CSV_CONTENT_TYPE: &str = "application/csv";

/// Extension appended to every export filename.
pub const CSV_EXTENSION: &str = ".csv";

/// Outcome of a completed download.
///
/// Once a sheet has been delivered the caller is expected to finish its
/// request; the sheet itself is consumed by the download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Attachment filename declared to the sink, extension included
    pub filename: String,
    /// Number of lines encoded
    pub lines: usize,
    /// Number of bytes handed to the sink
    pub bytes: usize,
}

impl Sheet {
    /// Encode the sheet as CSV text.
    pub fn to_csv(&self) -> String {
        to_delimited_string(self.data(), &DelimitedConfig::csv())
    }

    /// Encode the sheet with a custom configuration.
    pub fn to_delimited(&self, config: &DelimitedConfig) -> String {
        to_delimited_string(self.data(), config)
    }

    /// Stream the sheet as CSV into `writer`, one line at a time.
    ///
    /// Fails with [`Error::WriteFailure`] at the first rejected line.
    pub fn write_csv<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        write_delimited(self.data(), writer, &DelimitedConfig::csv())
    }

    /// Deliver the sheet to `sink` as a CSV attachment.
    ///
    /// `filename` is used without its extension; `.csv` is always appended.
    /// When it is `None` or empty a name like `simple_csv_file_vc_aspmels`
    /// is generated.
    pub fn download<S: Sink>(self, sink: S, filename: Option<&str>) -> Result<Delivery> {
        self.download_with(sink, filename, &DelimitedConfig::csv())
    }

    /// Deliver the sheet to `sink` using a custom encoder configuration.
    ///
    /// The whole payload is encoded into a local buffer first and handed to
    /// the sink as a single block, then the sink is closed.
    pub fn download_with<S: Sink>(
        self,
        mut sink: S,
        filename: Option<&str>,
        config: &DelimitedConfig,
    ) -> Result<Delivery> {
        let stem = match filename {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => generate_file_stem(),
        };
        let filename = format!("{stem}{CSV_EXTENSION}");

        sink.declare_content_type(CSV_CONTENT_TYPE);
        sink.declare_attachment(&filename);

        let mut payload = Vec::new();
        write_delimited(self.data(), &mut payload, config)?;

        if let Err(e) = sink.write(&payload) {
            tracing::warn!("Failed to transmit {}: {}", filename, e);
            return Err(Error::Transmit(e));
        }
        if let Err(e) = sink.close() {
            tracing::warn!("Failed to close sink for {}: {}", filename, e);
            return Err(Error::SinkCloseFailure(e));
        }

        tracing::info!(
            "Delivered {} ({} lines, {} bytes)",
            filename,
            self.len(),
            payload.len()
        );

        Ok(Delivery {
            filename,
            lines: self.len(),
            bytes: payload.len(),
        })
    }
}
