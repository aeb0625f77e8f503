use log::trace;

use super::depth;
use crate::matching::{
    count::{Needle, count_occurrences},
    cursor::ScanCursor,
};

/// Finds the closing `end` marker by counting whole `start` markers between
/// end-marker hits.
///
/// The open count only grows between decrements, so it can never drop below
/// zero and the search ends exactly when it reaches zero.
pub fn find(mut cursor: ScanCursor<'_>, start: &str, end: &str) -> Option<usize> {
    let text = cursor.s;
    let mut open: isize = 1;
    loop {
        open -= 1;
        let found = cursor.find_next(end)?;
        let from = cursor.pos();
        let nested = count_occurrences(text, from, found, Needle::Str(start));
        if nested > 0 {
            open += depth(nested);
        }
        debug_assert!(open >= 0, "open count went negative: {open}");
        trace!("long scan: gap {from}..{found} nested={nested} open={open}");
        cursor.seek(found + end.len());
        if open == 0 {
            return Some(found);
        }
    }
}
