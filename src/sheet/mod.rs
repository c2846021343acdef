//! Sheet building and CSV export.
//!
//! A [`Sheet`] collects lines (titles, headers, data rows and blank spacers)
//! in the order they are added. The finished sheet is encoded as delimited
//! text and handed to a [`Sink`] as a downloadable attachment.
//!
//! # Example
//!
//! ```rust
//! use tabsheet::sheet::{MemorySink, Sheet, TitleStyle};
//!
//! let mut sheet = Sheet::new();
//! sheet
//!     .add_title_with("Inventory", &TitleStyle::new().with_dashes(3))
//!     .set_headers(["item", "qty"])
//!     .set_row(["bolts, 10mm", "40"])
//!     .add_space(1);
//!
//! let mut sink = MemorySink::new();
//! let delivery = sheet.download(&mut sink, Some("inventory"))?;
//!
//! assert_eq!(delivery.filename, "inventory.csv");
//! assert_eq!(
//!     sink.body(),
//!     b"--- Inventory ---\nitem,qty\n\"bolts, 10mm\",40\n\n"
//! );
//! # Ok::<(), tabsheet::Error>(())
//! ```

pub mod buffer;
pub mod export;
pub mod sink;
pub mod text;
pub mod types;

pub use buffer::Sheet;
pub use export::{CSV_CONTENT_TYPE, CSV_EXTENSION, Delivery};
pub use sink::{MemorySink, Sink, WriterSink};
pub use text::{DelimitedConfig, LineTerminator};
pub use types::{Cell, Line, TitleStyle};
