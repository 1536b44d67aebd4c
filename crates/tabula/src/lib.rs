//! # Tabula - Aligned, Bordered Terminal Tables
//!
//! `tabula` renders tabular data as aligned, optionally bordered text for
//! terminal display. Each of the seven border positions (Top, Bottom,
//! Left, Right, Center, Header, Horizontal) can be shown or hidden and
//! rendered in light or heavy box-drawing weight, independently — every
//! junction character is selected from explicit lookup tables covering
//! all weight combinations, so mixed light/heavy tables join up cleanly.
//!
//! ## Core Concepts
//!
//! - [`Table`]: columns, rows, per-column alignment, and render methods
//! - [`Borders`] / [`BorderPosition`] / [`Edge`]: which lines are drawn
//!   and at what weight
//! - [`Alignment`]: left or right, set per column for body and header
//!   independently
//! - [`RenderOptions`]: the padding constant and the width measurement
//!   function (codepoint count by default)
//! - [`glyph`]: the pure junction-glyph lookup tables
//!
//! ## Quick Start
//!
//! ```rust
//! use tabula::{Alignment, BorderPosition, Table};
//!
//! let mut table = Table::new(["Task", "Status", "Count"]);
//! table.add_row(["build", "ok", "3"]).unwrap();
//! table.add_row(["test", "pending", "14"]).unwrap();
//!
//! table.set_alignment("Count", Alignment::Right, false);
//! table.set_border(BorderPosition::Top, true, false);
//! table.set_border(BorderPosition::Center, true, false);
//! table.set_border(BorderPosition::Header, true, true);
//! table.set_border(BorderPosition::Bottom, true, false);
//!
//! println!("{}", table.render());
//! ```
//!
//! ## Mixed Border Weights
//!
//! Where a heavy line meets a light one, the box-drawing set has a
//! dedicated glyph for each combination. A light top border crossing a
//! heavy column separator yields `┰`; a heavy header separator crossing a
//! light one yields `╇`. The selection rules live in [`glyph`] and are a
//! pure function of the border configuration.
//!
//! ## What This Crate Does Not Do
//!
//! No cell wrapping, no ANSI styling, no data import — cells are plain
//! strings, and the output is a sequence of text lines ([`Table::render_lines`])
//! or a write to any [`std::io::Write`] sink ([`Table::write_to`]).

mod borders;
mod error;
pub mod glyph;
mod layout;
mod options;
mod table;

pub use borders::{BorderPosition, Borders, Edge};
pub use error::TableError;
pub use options::{codepoint_width, display_width, MeasureFn, RenderOptions};
pub use table::{Alignment, Table};
