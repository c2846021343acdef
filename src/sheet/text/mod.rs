//! Delimited text output (CSV, TSV).
//!
//! Lines are encoded RFC 4180 style: a field is wrapped in quotes when it
//! contains the delimiter, a quote, `\r` or `\n`, and embedded quotes are
//! doubled. Every line, including the last, ends with the configured
//! terminator; an empty line encodes to the terminator alone.
//!
//! # Example
//!
//! ```rust
//! use tabsheet::sheet::text::{DelimitedConfig, to_delimited_string};
//!
//! let lines = vec![
//!     vec!["a,b".to_string(), "c\"d".to_string(), "plain".to_string()],
//!     vec![],
//! ];
//! let csv = to_delimited_string(&lines, &DelimitedConfig::csv());
//! assert_eq!(csv, "\"a,b\",\"c\"\"d\",plain\n\n");
//! ```

pub mod delimited;

pub use delimited::{
    DelimitedConfig, LineTerminator, encode_line, escape_field, to_delimited_string,
    write_delimited,
};

#[cfg(test)]
mod tests;
