//! Table state and rendering.
//!
//! A [`Table`] owns its column names, per-column alignment, rows, and
//! border configuration, and renders them as a sequence of text lines.
//! Rendering is a total function of the current state: malformed rows are
//! rejected at [`Table::add_row`] time, so the renderer has no failure
//! modes of its own.
//!
//! # Example
//!
//! ```rust
//! use tabula::{Alignment, BorderPosition, Table};
//!
//! let mut table = Table::new(["Name", "Count"]);
//! table.add_row(["Alice", "42"]).unwrap();
//! table.add_row(["Bob", "7"]).unwrap();
//! table.set_alignment("Count", Alignment::Right, false);
//! table.set_border(BorderPosition::Center, true, false);
//! table.set_border(BorderPosition::Header, true, true);
//!
//! println!("{}", table.render());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use crate::borders::{BorderPosition, Borders, Edge};
use crate::error::TableError;
use crate::glyph::{self, LineGlyphs};
use crate::layout;
use crate::options::RenderOptions;

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Left => write!(f, "Left"),
            Alignment::Right => write!(f, "Right"),
        }
    }
}

/// An aligned, optionally bordered table of string cells.
#[derive(Clone, Debug)]
pub struct Table {
    /// Column names in display order. Fixed at construction.
    columns: Vec<String>,
    /// Body-cell alignment per column.
    column_alignment: HashMap<String, Alignment>,
    /// Header alignment per column, independent of the body alignment.
    header_alignment: HashMap<String, Alignment>,
    /// Data rows in insertion order. Every row has `columns.len()` cells.
    rows: Vec<Vec<String>>,
    /// Rendered width per column. Derived from rows and headers; treated
    /// as a cache and recomputed before each render.
    column_widths: HashMap<String, usize>,
    borders: Borders,
    options: RenderOptions,
}

impl Table {
    /// Create a table with the given column names and default options.
    ///
    /// Column names must be a non-empty sequence of unique strings;
    /// duplicates are not validated and are the caller's problem. All
    /// alignments start as [`Alignment::Left`], all borders hidden, and
    /// every column width as the measured width of its header label.
    pub fn new<S, I>(columns: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        Self::with_options(columns, RenderOptions::default())
    }

    /// Create a table with explicit render options.
    pub fn with_options<S, I>(columns: I, options: RenderOptions) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut column_alignment = HashMap::new();
        let mut header_alignment = HashMap::new();
        let mut column_widths = HashMap::new();
        for name in &columns {
            column_alignment.insert(name.clone(), Alignment::Left);
            header_alignment.insert(name.clone(), Alignment::Left);
            column_widths.insert(name.clone(), (options.measure)(name));
        }
        Table {
            columns,
            column_alignment,
            header_alignment,
            rows: Vec::new(),
            column_widths,
            borders: Borders::default(),
            options,
        }
    }

    /// Append a data row.
    ///
    /// Fails with [`TableError::ShapeMismatch`] when the cell count does
    /// not equal the column count; the table is left unchanged. Empty
    /// string cells are accepted.
    pub fn add_row<S, I>(&mut self, cells: I) -> Result<(), TableError>
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(TableError::ShapeMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Set the body alignment for a column; with `apply_to_header` the
    /// header alignment is updated as well.
    ///
    /// An unknown column name is silently ignored. This permissive stance
    /// is deliberate (a typo leaves the column left-aligned rather than
    /// failing the whole render).
    pub fn set_alignment(&mut self, column: &str, alignment: Alignment, apply_to_header: bool) {
        if !self.column_alignment.contains_key(column) {
            return;
        }
        self.column_alignment.insert(column.to_string(), alignment);
        if apply_to_header {
            self.header_alignment.insert(column.to_string(), alignment);
        }
    }

    /// Set the visibility and weight of one border position.
    pub fn set_border(&mut self, position: BorderPosition, show: bool, bold: bool) {
        self.borders.set(position, show, bold);
    }

    /// Get the current state of one border position.
    pub fn border(&self, position: BorderPosition) -> Edge {
        self.borders.get(position)
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows currently in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Recompute every column's width as the maximum measured width over
    /// its header label and every cell currently in the column.
    ///
    /// Called implicitly by the render methods; call it directly before
    /// any width-dependent query ([`Table::column_span`]) if rows have
    /// been added since the last render.
    pub fn refresh_widths(&mut self) {
        let measure = self.options.measure;
        for name in &self.columns {
            self.column_widths.insert(name.clone(), measure(name));
        }
        for row in &self.rows {
            for (name, cell) in self.columns.iter().zip(row) {
                let width = self.column_widths.entry(name.clone()).or_default();
                *width = (*width).max(measure(cell));
            }
        }
    }

    /// Spaces emitted before the content of the column at `index`.
    pub fn padding_before(&self, index: usize) -> usize {
        layout::padding_before(&self.borders, self.options.padding, index)
    }

    /// Spaces emitted after the content of the column at `index`.
    pub fn padding_after(&self, index: usize) -> usize {
        let last = self.columns.len().saturating_sub(1);
        layout::padding_after(&self.borders, self.options.padding, index, last)
    }

    /// The width a column occupies, by name.
    ///
    /// Without padding this is the column's content width; with padding it
    /// is the exact number of dash glyphs the column contributes to every
    /// border line. Returns `None` for an unknown column name. Uses the
    /// cached widths, so call [`Table::refresh_widths`] first if rows have
    /// been added since the last render.
    pub fn column_span(&self, column: &str, include_padding: bool) -> Option<usize> {
        let index = self.columns.iter().position(|name| name == column)?;
        let width = self.column_widths.get(column).copied().unwrap_or(0);
        if include_padding {
            Some(width + self.padding_before(index) + self.padding_after(index))
        } else {
            Some(width)
        }
    }

    /// Render the table as a sequence of text lines.
    ///
    /// Emitted in fixed order: top border, header row, header separator,
    /// data rows with separators between consecutive rows, bottom border —
    /// each border line only when its position is shown. The header row
    /// and data rows are always emitted.
    pub fn render_lines(&mut self) -> Vec<String> {
        self.refresh_widths();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|name| self.column_widths.get(name).copied().unwrap_or(0))
            .collect();

        let mut lines = Vec::new();
        if self.borders.top.show {
            lines.push(self.border_line(glyph::TOP, self.borders.top.bold, &widths));
        }
        lines.push(self.cell_line(&widths, &self.columns, true));
        if self.borders.header.show {
            // The header separator meets the left/right edges as a tee
            // when a top border sits above it, and as a corner otherwise.
            let glyphs = if self.borders.top.show {
                glyph::HEADER_BELOW_TOP
            } else {
                glyph::HEADER_AT_TOP
            };
            lines.push(self.border_line(glyphs, self.borders.header.bold, &widths));
        }
        for (i, row) in self.rows.iter().enumerate() {
            lines.push(self.cell_line(&widths, row, false));
            if i + 1 < self.rows.len() && self.borders.horizontal.show {
                lines.push(self.border_line(
                    glyph::HORIZONTAL,
                    self.borders.horizontal.bold,
                    &widths,
                ));
            }
        }
        if self.borders.bottom.show {
            lines.push(self.border_line(glyph::BOTTOM, self.borders.bottom.bold, &widths));
        }
        lines
    }

    /// Render the table as a single string, lines joined with newlines.
    pub fn render(&mut self) -> String {
        self.render_lines().join("\n")
    }

    /// Write the rendered table to an output sink, one line at a time.
    pub fn write_to<W: io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        for line in self.render_lines() {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    /// Emit one horizontal border line: left terminator (if Left is
    /// shown), a dash run of each column's padded span with a center
    /// junction between columns (if Center is shown), and the right
    /// terminator (if Right is shown).
    fn border_line(&self, glyphs: LineGlyphs, bold: bool, widths: &[usize]) -> String {
        let mut line = String::new();
        if self.borders.left.show {
            line.push(glyphs.left.pick(bold, self.borders.left.bold));
        }
        let last = widths.len().saturating_sub(1);
        for (i, &width) in widths.iter().enumerate() {
            let span = width + self.padding_before(i) + self.padding_after(i);
            line.extend(std::iter::repeat_n(glyph::dash(bold), span));
            if i < last && self.borders.center.show {
                line.push(glyphs.center.pick(bold, self.borders.center.bold));
            }
        }
        if self.borders.right.show {
            line.push(glyphs.right.pick(bold, self.borders.right.bold));
        }
        line
    }

    /// Emit one cell row (header or data).
    fn cell_line(&self, widths: &[usize], cells: &[String], header: bool) -> String {
        let measure = self.options.measure;
        let mut line = String::new();
        if self.borders.left.show {
            line.push(glyph::pipe(self.borders.left.bold));
        }
        let last = self.columns.len().saturating_sub(1);
        for (i, name) in self.columns.iter().enumerate() {
            let alignment = if header {
                self.header_alignment.get(name)
            } else {
                self.column_alignment.get(name)
            }
            .copied()
            .unwrap_or_default();
            let content = cells.get(i).map(String::as_str).unwrap_or("");
            let fill = widths[i].saturating_sub(measure(content));

            line.push_str(&" ".repeat(self.padding_before(i)));
            match alignment {
                Alignment::Left => {
                    line.push_str(content);
                    line.push_str(&" ".repeat(fill));
                }
                Alignment::Right => {
                    line.push_str(&" ".repeat(fill));
                    line.push_str(content);
                }
            }
            line.push_str(&" ".repeat(self.padding_after(i)));

            if i < last && self.borders.center.show {
                line.push(glyph::pipe(self.borders.center.bold));
            }
        }
        if self.borders.right.show {
            line.push(glyph::pipe(self.borders.right.bold));
        }
        line
    }
}
