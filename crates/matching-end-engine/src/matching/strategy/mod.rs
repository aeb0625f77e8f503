//! # Scan Strategies
//!
//! Both strategies walk forward from one end-marker occurrence to the next,
//! keeping a nesting counter that starts at 1 for the already consumed
//! opener. Each end-marker hit closes one level; openers seen in the gap
//! before it open new ones.
//!
//! - **`short`**: counts single chars. Used when either marker is a doubled
//!   char such as `{{`.
//! - **`long`**: counts whole start-marker strings. Used otherwise.
//!
//! On balanced input without stray marker chars the two agree; which one runs
//! only changes how the gap is counted.

pub mod long;
pub mod short;

use super::{
    cursor::ScanCursor,
    marker::{MarkerShape, counting_char},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Count the given start and end chars.
    Short { start: char, end: char },
    /// Count whole start markers.
    Long,
}

impl Strategy {
    /// Picks the strategy for a marker pair. Expects non-empty markers.
    pub fn select(start: &str, end: &str) -> Self {
        let either_short =
            MarkerShape::classify(start).is_short() || MarkerShape::classify(end).is_short();
        match (counting_char(start), counting_char(end)) {
            (Some(start), Some(end)) if either_short => Self::Short { start, end },
            _ => Self::Long,
        }
    }

    /// Runs this strategy from `after_start`.
    pub fn run(self, start: &str, end: &str, text: &str, after_start: usize) -> Option<usize> {
        let cursor = ScanCursor::new(text, after_start)?;
        match self {
            Self::Short {
                start: start_char,
                end: end_char,
            } => short::find(cursor, start_char, end_char, end),
            Self::Long => long::find(cursor, start, end),
        }
    }
}

/// Converts an occurrence count into a depth delta.
fn depth(count: usize) -> isize {
    isize::try_from(count).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::both_short("{{", "}}", Strategy::Short { start: '{', end: '}' })]
    #[case::start_short("{{", "}", Strategy::Short { start: '{', end: '}' })]
    #[case::end_short("[", "]]", Strategy::Short { start: '[', end: ']' })]
    #[case::mixed_long("<%", "]]", Strategy::Short { start: '<', end: ']' })]
    #[case::both_long("<!--", "-->", Strategy::Long)]
    #[case::single_chars("(", ")", Strategy::Long)]
    fn select(#[case] start: &str, #[case] end: &str, #[case] expected: Strategy) {
        assert_eq!(Strategy::select(start, end), expected);
    }

    #[test]
    fn run_rejects_start_past_end() {
        assert_eq!(Strategy::Long.run("(", ")", "()", 3), None);
    }
}
