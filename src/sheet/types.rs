//! Common types for sheet building.

use serde::{Deserialize, Serialize};

/// A single text field. Other values are stringified by the caller.
pub type Cell = String;

/// One output row. An empty line renders as a blank spacer row.
pub type Line = Vec<Cell>;

/// Decoration applied to a title line.
///
/// With the default style the title is emitted verbatim. A non-zero dash
/// count wraps the title in a run of `dash` characters on both sides,
/// separated from the text by one space each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleStyle {
    /// Length of the dash run on each side of the title
    pub dashes: usize,
    /// Number of blank cells placed before the title cell
    pub margin_left: usize,
    /// Character the dash run is built from
    pub dash: char,
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            dashes: 0,
            margin_left: 0,
            dash: '-',
        }
    }
}

impl TitleStyle {
    /// Create the default (undecorated) style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dash run length
    pub fn with_dashes(mut self, dashes: usize) -> Self {
        self.dashes = dashes;
        self
    }

    /// Set the number of leading blank cells
    pub fn with_margin_left(mut self, margin_left: usize) -> Self {
        self.margin_left = margin_left;
        self
    }

    /// Set the dash character
    pub fn with_dash(mut self, dash: char) -> Self {
        self.dash = dash;
        self
    }

    /// Render `title` into the line this style describes.
    pub fn render(&self, title: &str) -> Line {
        let mut line = Vec::with_capacity(self.margin_left + 1);
        line.resize(self.margin_left, Cell::new());

        let run: String = std::iter::repeat_n(self.dash, self.dashes).collect();
        if run.is_empty() {
            line.push(title.to_string());
        } else {
            line.push(format!("{run} {title} {run}"));
        }

        line
    }
}
