use log::debug;

use super::{
    cursor::ScanCursor,
    marker::{MarkerError, MarkerPair},
    span::Span,
    strategy::Strategy,
};

/// Returned by [`matching_end_index`] when no closing marker exists.
pub const NO_MATCH: i64 = -1;

/// Finds the end marker that closes an opener ending at `after_start`.
///
/// `after_start` is the byte offset just past an opening `start` marker.
/// Returns the byte offset where the matching `end` marker begins, skipping
/// over nested pairs, or `None` when the text runs out first. Empty markers
/// and offsets past the end of `text` never match.
pub fn find_matching_end(start: &str, end: &str, text: &str, after_start: usize) -> Option<usize> {
    if start.is_empty() || end.is_empty() {
        debug!("empty marker in pair {start:?}/{end:?}, nothing to match");
        return None;
    }
    let strategy = Strategy::select(start, end);
    let found = strategy.run(start, end, text, after_start);
    if found.is_none() {
        debug!("no {end:?} closes {start:?} opened before offset {after_start}");
    }
    found
}

/// [`find_matching_end`] with a signed offset and a `-1` sentinel result.
///
/// Negative offsets return [`NO_MATCH`] without scanning.
pub fn matching_end_index(start: &str, end: &str, text: &str, after_start: i64) -> i64 {
    let Ok(after_start) = usize::try_from(after_start) else {
        return NO_MATCH;
    };
    find_matching_end(start, end, text, after_start)
        .and_then(|found| i64::try_from(found).ok())
        .unwrap_or(NO_MATCH)
}

/// One matched pair: opener, enclosed content and closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enclosure {
    pub open: Span,
    pub inner: Span,
    pub close: Span,
}

/// Matching for one marker pair, with the strategy chosen up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingEndFinder {
    pair: MarkerPair,
    strategy: Strategy,
}

impl MatchingEndFinder {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self, MarkerError> {
        Ok(Self::for_pair(MarkerPair::new(start, end)?))
    }

    pub fn for_pair(pair: MarkerPair) -> Self {
        let strategy = Strategy::select(pair.start(), pair.end());
        Self { pair, strategy }
    }

    pub fn pair(&self) -> &MarkerPair {
        &self.pair
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// See [`find_matching_end`].
    pub fn find(&self, text: &str, after_start: usize) -> Option<usize> {
        self.strategy
            .run(self.pair.start(), self.pair.end(), text, after_start)
    }

    /// Span of the content between `after_start` and its closing marker.
    pub fn find_enclosed(&self, text: &str, after_start: usize) -> Option<Span> {
        let start = ScanCursor::new(text, after_start)?.pos();
        let end = self.find(text, start)?;
        Some(Span { start, end })
    }

    /// Every top-level pair in `text`, left to right.
    ///
    /// Scanning resumes after each closer, so pairs nested inside a match
    /// are not reported separately. An opener with no closer ends the scan.
    pub fn find_all_closing(&self, text: &str) -> Vec<Enclosure> {
        let (start, end) = (self.pair.start(), self.pair.end());
        let mut out = vec![];
        let mut from = 0;
        while let Some(off) = text[from..].find(start) {
            let open_at = from + off;
            let inner_start = open_at + start.len();
            let Some(close_at) = self.find(text, inner_start) else {
                debug!("opener at {open_at} is never closed");
                break;
            };
            let close_end = close_at + end.len();
            out.push(Enclosure {
                open: Span {
                    start: open_at,
                    end: inner_start,
                },
                inner: Span {
                    start: inner_start,
                    end: close_at,
                },
                close: Span {
                    start: close_at,
                    end: close_end,
                },
            });
            from = close_end;
        }
        out
    }
}
