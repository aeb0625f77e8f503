//! # Matching End Markers
//!
//! Given a start marker, an end marker and an offset just past an opener,
//! find the end marker that closes that opener, skipping over nested pairs.
//!
//! ## Modules
//!
//! - **`marker`**: `MarkerShape` classification and the validated `MarkerPair`
//! - **`cursor`**: `ScanCursor`, a forward-only byte position kept on char boundaries
//! - **`count`**: `count_occurrences`, the non-overlapping counting primitive
//! - **`strategy`**: short (char counting) and long (marker counting) scans
//! - **`finder`**: `find_matching_end` entry point and `MatchingEndFinder`
//! - **`span`**: `Span` byte ranges for enclosed content
//!
//! ## Dispatch
//!
//! A marker is *short* when it is exactly two identical chars (`{{`, `]]`).
//! If either marker of a pair is short, the scan counts chars; otherwise it
//! counts whole start markers.
//!
//! ## Positions
//!
//! All offsets are byte offsets into the text. A start offset that falls
//! inside a multi-byte char is moved forward to the next char boundary.

pub mod count;
pub mod cursor;
pub mod finder;
pub mod marker;
pub mod span;
pub mod strategy;

pub use count::{Needle, count_occurrences};
pub use finder::{Enclosure, MatchingEndFinder, NO_MATCH, find_matching_end, matching_end_index};
pub use marker::{MarkerError, MarkerPair, MarkerShape};
pub use span::Span;
pub use strategy::Strategy;
