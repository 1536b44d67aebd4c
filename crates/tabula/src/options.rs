//! Render-time configuration: cell padding and width measurement.
//!
//! These used to be natural candidates for process-wide defaults; they are
//! instead explicit fields on the table so two tables in the same process
//! can render with different settings.

/// Function used to measure the rendered width of a string.
pub type MeasureFn = fn(&str) -> usize;

/// Measure a string by Unicode codepoint count (the default).
///
/// This deliberately ignores east-asian double-width rendering; use
/// [`display_width`] if the output terminal matters more than the
/// codepoint count.
pub fn codepoint_width(s: &str) -> usize {
    s.chars().count()
}

/// Measure a string by terminal display columns (CJK characters count as 2).
pub fn display_width(s: &str) -> usize {
    use unicode_width::UnicodeWidthStr;
    s.width()
}

/// Configuration applied when a table is rendered.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Number of spaces around cell content (default: 1). Whether the
    /// padding is actually emitted at a given column boundary depends on
    /// the border configuration, not on this constant alone.
    pub padding: usize,
    /// Width measurement function (default: [`codepoint_width`]).
    pub measure: MeasureFn,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            padding: 1,
            measure: codepoint_width,
        }
    }
}

impl RenderOptions {
    /// Set the padding constant.
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Set the width measurement function.
    pub fn measure(mut self, measure: MeasureFn) -> Self {
        self.measure = measure;
        self
    }
}
