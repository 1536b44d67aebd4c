//! Padding computation for column boundaries.
//!
//! Leading padding for a column is driven by whether a separator exists to
//! its left (the Left border for the first column); trailing padding by
//! the separator to its right (Center, or Right for the last column).
//! Middle columns get the constant on both sides regardless of
//! `Center.show` — this asymmetry is intentional and calibrated output
//! depends on it, so it must not be "simplified" into a symmetric rule.

use crate::borders::Borders;

/// Spaces emitted before the content of the column at `index`.
pub(crate) fn padding_before(borders: &Borders, padding: usize, index: usize) -> usize {
    if index == 0 && !borders.left.show {
        0
    } else {
        padding
    }
}

/// Spaces emitted after the content of the column at `index`, where `last`
/// is the index of the final column.
pub(crate) fn padding_after(borders: &Borders, padding: usize, index: usize, last: usize) -> usize {
    if index == 0 {
        // First column: trailing padding only when a Center separator follows.
        if borders.center.show {
            padding
        } else {
            0
        }
    } else if index == last {
        if borders.right.show {
            padding
        } else {
            0
        }
    } else {
        padding
    }
}
