//! Border configuration: seven independent positions, each with a `show`
//! and a `bold` flag.
//!
//! The two flags are fully independent: setting `bold` on a hidden border
//! is legal and has no visible effect until the border is shown.

use serde::{Deserialize, Serialize};

/// An independently configurable line or edge in the rendered table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderPosition {
    /// The line above the header row.
    Top,
    /// The line below the last data row.
    Bottom,
    /// The left edge of every row.
    Left,
    /// The right edge of every row.
    Right,
    /// The vertical separators between columns.
    Center,
    /// The separator line under the header row.
    Header,
    /// The separator lines between data rows.
    Horizontal,
}

/// Visibility and weight of one border position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Whether the border is rendered at all.
    pub show: bool,
    /// Whether heavy-weight box-drawing glyphs are used.
    pub bold: bool,
}

impl Edge {
    /// Create an edge with explicit flags.
    pub fn new(show: bool, bold: bool) -> Self {
        Edge { show, bold }
    }
}

/// The full border configuration for a table.
///
/// Defaults to everything hidden, light weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borders {
    pub top: Edge,
    pub bottom: Edge,
    pub left: Edge,
    pub right: Edge,
    pub center: Edge,
    pub header: Edge,
    pub horizontal: Edge,
}

impl Borders {
    /// Set the visibility and weight of one border position.
    pub fn set(&mut self, position: BorderPosition, show: bool, bold: bool) {
        *self.slot(position) = Edge { show, bold };
    }

    /// Get the current state of one border position.
    pub fn get(&self, position: BorderPosition) -> Edge {
        match position {
            BorderPosition::Top => self.top,
            BorderPosition::Bottom => self.bottom,
            BorderPosition::Left => self.left,
            BorderPosition::Right => self.right,
            BorderPosition::Center => self.center,
            BorderPosition::Header => self.header,
            BorderPosition::Horizontal => self.horizontal,
        }
    }

    fn slot(&mut self, position: BorderPosition) -> &mut Edge {
        match position {
            BorderPosition::Top => &mut self.top,
            BorderPosition::Bottom => &mut self.bottom,
            BorderPosition::Left => &mut self.left,
            BorderPosition::Right => &mut self.right,
            BorderPosition::Center => &mut self.center,
            BorderPosition::Header => &mut self.header,
            BorderPosition::Horizontal => &mut self.horizontal,
        }
    }
}
