//! Destinations for exported sheets.
//!
//! A [`Sink`] is whatever ends up holding the encoded bytes: an HTTP
//! response, a file, a socket. Content type and attachment name are hints
//! the sink may turn into headers or ignore.

use std::io::{self, Write};

/// Output channel an export writes into.
pub trait Sink {
    /// Declare the MIME type of the payload.
    fn declare_content_type(&mut self, mime_type: &str);

    /// Declare that the payload should be saved as `filename`.
    fn declare_attachment(&mut self, filename: &str);

    /// Transmit encoded bytes.
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Finalize the sink once everything has been written.
    fn close(&mut self) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn declare_content_type(&mut self, mime_type: &str) {
        (**self).declare_content_type(mime_type);
    }

    fn declare_attachment(&mut self, filename: &str) {
        (**self).declare_attachment(filename);
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write(bytes)
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// Render the `Content-Disposition` value for an attachment.
pub fn attachment_disposition(filename: &str) -> String {
    let escaped = filename.replace('\\', "\\\\").replace('"', "\\\"");
    format!("attachment; filename=\"{}\"", escaped)
}

/// Sink over any [`Write`] implementation, such as a file or a response body.
///
/// Declared metadata is kept so the caller can emit it in whatever form its
/// transport needs. `close` flushes the writer.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
    content_type: Option<String>,
    attachment: Option<String>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            content_type: None,
            attachment: None,
        }
    }

    /// The declared content type, if any
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The declared attachment filename, if any
    pub fn attachment(&self) -> Option<&str> {
        self.attachment.as_deref()
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn declare_content_type(&mut self, mime_type: &str) {
        self.content_type = Some(mime_type.to_string());
    }

    fn declare_attachment(&mut self, filename: &str) {
        self.attachment = Some(filename.to_string());
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_all(bytes)
    }

    fn close(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Sink that collects headers and body in memory.
///
/// Useful for handing the result to a server framework's own response type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    headers: Vec<(String, String)>,
    body: Vec<u8>,
    closed: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declared headers in declaration order
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First header with the given name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

impl Sink for MemorySink {
    fn declare_content_type(&mut self, mime_type: &str) {
        self.headers
            .push(("Content-Type".to_string(), mime_type.to_string()));
    }

    fn declare_attachment(&mut self, filename: &str) {
        self.headers.push((
            "Content-Disposition".to_string(),
            attachment_disposition(filename),
        ));
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.closed {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink already closed"));
        }
        self.body.extend_from_slice(bytes);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        Ok(())
    }
}
