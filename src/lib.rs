//! Tabsheet - build small tables in memory and ship them as CSV downloads
//!
//! This library assembles an ordered list of lines (decorative titles, a
//! header row, data rows and blank spacers) into a sheet, encodes it as
//! RFC 4180 style CSV and hands the bytes to an output sink such as an HTTP
//! response or a file.
//!
//! # Features
//!
//! - **Fluent builder**: every sheet operation appends and returns the sheet
//! - **Exact CSV output**: quoting only where the delimiter, quotes or line
//!   breaks require it, one terminator per line
//! - **Pluggable sinks**: deliver to any `Write`, or collect headers and body
//!   in memory for a server framework
//! - **Fail-fast export**: the first line that cannot be written aborts the
//!   export and is reported by number
//!
//! # Example
//!
//! ```rust
//! use tabsheet::{Sheet, TitleStyle};
//!
//! let mut sheet = Sheet::new();
//! sheet
//!     .add_title_with("Q3", &TitleStyle::new().with_dashes(2).with_margin_left(1))
//!     .set_headers(["name", "total"])
//!     .set_rows([["ada", "12"], ["grace", "15"]]);
//!
//! assert_eq!(sheet.to_csv(), ",-- Q3 --\nname,total\nada,12\ngrace,15\n");
//! ```
//!
//! # Feature Flags
//!
//! - `yaml` (default): load and save `DelimitedConfig` as YAML

pub mod common;
pub mod sheet;

pub use common::{Error, Result};
pub use sheet::{
    Cell, DelimitedConfig, Delivery, Line, LineTerminator, MemorySink, Sheet, Sink, TitleStyle,
    WriterSink,
};
