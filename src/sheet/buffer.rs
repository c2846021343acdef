//! The in-memory sheet buffer.

use serde::{Deserialize, Serialize};

use super::types::{Cell, Line, TitleStyle};

/// An ordered, append-only sequence of lines waiting to be encoded.
///
/// Every builder method appends to the end of the sheet and returns the
/// sheet again, so calls chain:
///
/// ```rust
/// use tabsheet::sheet::{Sheet, TitleStyle};
///
/// let mut sheet = Sheet::new();
/// sheet
///     .add_title_with("Report", &TitleStyle::new().with_dashes(3))
///     .add_space(1)
///     .set_headers(["name", "score"])
///     .set_rows([["alice", "9"], ["bob", "7"]]);
///
/// assert_eq!(sheet.data()[0], vec!["--- Report ---".to_string()]);
/// assert_eq!(sheet.len(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    lines: Vec<Line>,
    /// Header values accumulated across every `set_headers` call
    #[serde(default)]
    headers: Vec<Cell>,
    /// Scratch row, always empty between calls
    #[serde(skip)]
    row: Vec<Cell>,
}

impl Sheet {
    /// Create an empty sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an undecorated title line.
    pub fn add_title(&mut self, title: &str) -> &mut Self {
        self.add_title_with(title, &TitleStyle::default())
    }

    /// Append a title line decorated with `style`.
    ///
    /// The line holds `style.margin_left` blank cells followed by a single
    /// cell with the decorated title.
    pub fn add_title_with(&mut self, title: &str, style: &TitleStyle) -> &mut Self {
        self.lines.push(style.render(title));
        self
    }

    /// Append header values and emit a header line.
    ///
    /// Headers accumulate across calls: each call emits every header passed
    /// so far, so `set_headers(["a"])` followed by `set_headers(["b"])`
    /// produces the lines `a` and `a,b`.
    pub fn set_headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cell>,
    {
        self.headers.extend(headers.into_iter().map(Into::into));
        self.lines.push(self.headers.clone());
        self
    }

    /// Append one data row holding exactly `columns`, in order.
    pub fn set_row<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cell>,
    {
        self.row.extend(columns.into_iter().map(Into::into));
        self.lines.push(std::mem::take(&mut self.row));
        self
    }

    /// Append one data row per element of `rows`, in order.
    pub fn set_rows<R, I, S>(&mut self, rows: R) -> &mut Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<Cell>,
    {
        for row in rows {
            self.set_row(row);
        }
        self
    }

    /// Append `count` blank lines.
    pub fn add_space(&mut self, count: usize) -> &mut Self {
        self.lines.extend(std::iter::repeat_n(Line::new(), count));
        self
    }

    /// All lines appended so far, in output order.
    #[inline]
    pub fn data(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines in the sheet.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no line has been appended yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the sheet and return its lines.
    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }
}
