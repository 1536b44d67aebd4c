//! Box-drawing glyph selection for border lines.
//!
//! Every junction character in a rendered table is a pure function of
//! which borders meet there and whether each is bold. Rather than nesting
//! conditionals, each horizontal line kind carries explicit four-way
//! lookup tables — one per junction — keyed on (line bold, crossing
//! border bold). This keeps every combination enumerable in tests.
//!
//! Hidden neighbors never reach these tables: when a border is not shown
//! the renderer emits no junction at all, so a hidden neighbor's weight
//! is irrelevant by construction.

/// Four-way junction table keyed on the weight of the horizontal line and
/// the border crossing (or terminating) it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Junction {
    /// Both the line and the crossing border are bold.
    pub both: char,
    /// Only the line itself is bold.
    pub line: char,
    /// Only the crossing border is bold.
    pub cross: char,
    /// Neither is bold.
    pub light: char,
}

impl Junction {
    /// Select the glyph for the given weight combination.
    pub const fn pick(&self, line_bold: bool, cross_bold: bool) -> char {
        match (line_bold, cross_bold) {
            (true, true) => self.both,
            (true, false) => self.line,
            (false, true) => self.cross,
            (false, false) => self.light,
        }
    }
}

/// Junction tables for one kind of horizontal border line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineGlyphs {
    /// Terminator against the Left border.
    pub left: Junction,
    /// Crossing with a Center separator.
    pub center: Junction,
    /// Terminator against the Right border.
    pub right: Junction,
}

/// The top border line.
pub const TOP: LineGlyphs = LineGlyphs {
    left: Junction {
        both: '┏',
        line: '┍',
        cross: '┎',
        light: '┌',
    },
    center: Junction {
        both: '┳',
        line: '┯',
        cross: '┰',
        light: '┬',
    },
    right: Junction {
        both: '┓',
        line: '┑',
        cross: '┒',
        light: '┐',
    },
};

/// The header separator when a top border is shown above it: the line
/// branches off the existing left/right edges, so its ends are tees.
pub const HEADER_BELOW_TOP: LineGlyphs = LineGlyphs {
    left: Junction {
        both: '┣',
        line: '┝',
        cross: '┠',
        light: '├',
    },
    center: Junction {
        both: '╋',
        line: '╇',
        cross: '╂',
        light: '┼',
    },
    right: Junction {
        both: '┫',
        line: '┩',
        cross: '┨',
        light: '┤',
    },
};

/// The header separator when the top border is hidden: the line is the
/// topmost in the table, so its ends are corners. The center junction is
/// unchanged because column separators still continue below it.
pub const HEADER_AT_TOP: LineGlyphs = LineGlyphs {
    left: TOP.left,
    center: HEADER_BELOW_TOP.center,
    right: TOP.right,
};

/// Separator lines between data rows.
pub const HORIZONTAL: LineGlyphs = LineGlyphs {
    left: HEADER_BELOW_TOP.left,
    center: Junction {
        both: '╋',
        line: '┿',
        cross: '╂',
        light: '┼',
    },
    right: Junction {
        both: '┫',
        line: '┥',
        cross: '┨',
        light: '┤',
    },
};

/// The bottom border line.
pub const BOTTOM: LineGlyphs = LineGlyphs {
    left: Junction {
        both: '┗',
        line: '┕',
        cross: '┖',
        light: '└',
    },
    center: Junction {
        both: '┻',
        line: '┷',
        cross: '┸',
        light: '┴',
    },
    right: Junction {
        both: '┛',
        line: '┙',
        cross: '┚',
        light: '┘',
    },
};

/// Dash glyph for a horizontal run.
pub const fn dash(bold: bool) -> char {
    if bold {
        '━'
    } else {
        '─'
    }
}

/// Vertical edge glyph for cell rows.
pub const fn pipe(bold: bool) -> char {
    if bold {
        '┃'
    } else {
        '│'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Assert all four weight combinations of a junction at once.
    ///
    /// `expected` is ordered (both, line-only, cross-only, neither).
    fn assert_junction(junction: Junction, expected: [char; 4]) {
        assert_eq!(junction.pick(true, true), expected[0]);
        assert_eq!(junction.pick(true, false), expected[1]);
        assert_eq!(junction.pick(false, true), expected[2]);
        assert_eq!(junction.pick(false, false), expected[3]);
    }

    #[test]
    fn top_junctions() {
        assert_junction(TOP.left, ['┏', '┍', '┎', '┌']);
        assert_junction(TOP.center, ['┳', '┯', '┰', '┬']);
        assert_junction(TOP.right, ['┓', '┑', '┒', '┐']);
    }

    #[test]
    fn header_below_top_junctions() {
        assert_junction(HEADER_BELOW_TOP.left, ['┣', '┝', '┠', '├']);
        assert_junction(HEADER_BELOW_TOP.center, ['╋', '╇', '╂', '┼']);
        assert_junction(HEADER_BELOW_TOP.right, ['┫', '┩', '┨', '┤']);
    }

    #[test]
    fn header_at_top_uses_corner_ends() {
        assert_junction(HEADER_AT_TOP.left, ['┏', '┍', '┎', '┌']);
        assert_junction(HEADER_AT_TOP.center, ['╋', '╇', '╂', '┼']);
        assert_junction(HEADER_AT_TOP.right, ['┓', '┑', '┒', '┐']);
    }

    #[test]
    fn horizontal_junctions() {
        assert_junction(HORIZONTAL.left, ['┣', '┝', '┠', '├']);
        assert_junction(HORIZONTAL.center, ['╋', '┿', '╂', '┼']);
        assert_junction(HORIZONTAL.right, ['┫', '┥', '┨', '┤']);
    }

    #[test]
    fn bottom_junctions() {
        assert_junction(BOTTOM.left, ['┗', '┕', '┖', '└']);
        assert_junction(BOTTOM.center, ['┻', '┷', '┸', '┴']);
        assert_junction(BOTTOM.right, ['┛', '┙', '┚', '┘']);
    }

    #[test]
    fn dash_and_pipe_weights() {
        assert_eq!(dash(false), '─');
        assert_eq!(dash(true), '━');
        assert_eq!(pipe(false), '│');
        assert_eq!(pipe(true), '┃');
    }

    #[test]
    fn pick_is_pure() {
        // Same inputs always yield the same glyph.
        for line_bold in [false, true] {
            for cross_bold in [false, true] {
                let first = HORIZONTAL.center.pick(line_bold, cross_bold);
                let second = HORIZONTAL.center.pick(line_bold, cross_bold);
                assert_eq!(first, second);
            }
        }
    }
}
