//! Property tests for table invariants.

use proptest::prelude::*;
use tabula::{BorderPosition, Table};

const COLUMNS: [&str; 3] = ["one", "two", "three"];

proptest! {
    #[test]
    fn column_width_is_exact_max_of_header_and_cells(
        rows in prop::collection::vec(
            prop::collection::vec("[a-zA-Z0-9 ]{0,24}", 3),
            0..12,
        ),
    ) {
        let mut table = Table::new(COLUMNS);
        for row in &rows {
            table.add_row(row.clone()).unwrap();
        }
        table.refresh_widths();

        for (i, name) in COLUMNS.iter().enumerate() {
            let expected = rows
                .iter()
                .map(|row| row[i].chars().count())
                .chain([name.chars().count()])
                .max()
                .unwrap();
            prop_assert_eq!(table.column_span(name, false), Some(expected));
        }
    }

    #[test]
    fn mismatched_row_is_rejected_and_leaves_table_unchanged(
        cells in prop::collection::vec("[a-z]{0,6}", 0..7),
    ) {
        let mut table = Table::new(COLUMNS);
        table.add_row(["x", "y", "z"]).unwrap();
        let before = table.row_count();

        let result = table.add_row(cells.clone());
        if cells.len() == COLUMNS.len() {
            prop_assert!(result.is_ok());
            prop_assert_eq!(table.row_count(), before + 1);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(table.row_count(), before);
        }
    }

    #[test]
    fn every_rendered_line_has_equal_width(
        rows in prop::collection::vec(
            prop::collection::vec("[a-zA-Z0-9 ]{0,16}", 3),
            1..8,
        ),
        show in prop::collection::vec(any::<bool>(), 7),
        bold in prop::collection::vec(any::<bool>(), 7),
    ) {
        use BorderPosition::*;

        let mut table = Table::new(COLUMNS);
        for row in &rows {
            table.add_row(row.clone()).unwrap();
        }
        for (i, position) in [Top, Bottom, Left, Right, Center, Header, Horizontal]
            .into_iter()
            .enumerate()
        {
            table.set_border(position, show[i], bold[i]);
        }

        let lines = table.render_lines();
        prop_assert!(!lines.is_empty());
        let width = lines[0].chars().count();
        for line in &lines {
            prop_assert_eq!(line.chars().count(), width, "line {:?}", line);
        }
    }

    #[test]
    fn rendering_is_deterministic(
        rows in prop::collection::vec(
            prop::collection::vec("[a-z]{0,8}", 3),
            0..6,
        ),
    ) {
        let mut table = Table::new(COLUMNS);
        for row in &rows {
            table.add_row(row.clone()).unwrap();
        }
        table.set_border(BorderPosition::Top, true, true);
        table.set_border(BorderPosition::Center, true, false);
        table.set_border(BorderPosition::Header, true, false);
        table.set_border(BorderPosition::Bottom, true, true);

        let first = table.render_lines();
        let second = table.render_lines();
        prop_assert_eq!(first, second);
    }
}
