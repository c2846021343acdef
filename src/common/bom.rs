//! Byte Order Mark (BOM) helpers for exported text.
//!
//! Encoded sheets are always UTF-8, so the UTF-8 mark is the only one the
//! crate emits. Some spreadsheet viewers need it to pick the right encoding.

use std::io::{self, Write};

/// UTF-8 BOM bytes.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Writes the UTF-8 BOM to the writer.
pub fn write_bom<W: Write + ?Sized>(writer: &mut W) -> io::Result<()> {
    writer.write_all(&UTF8_BOM)
}

/// Returns `bytes` without a leading UTF-8 BOM, if one is present.
#[inline]
pub fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(bytes)
}
