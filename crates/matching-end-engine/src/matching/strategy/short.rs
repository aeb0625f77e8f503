use log::trace;

use super::depth;
use crate::matching::{
    count::{Needle, count_occurrences},
    cursor::ScanCursor,
};

/// Finds the closing `end_marker` by counting bare `start_char` and
/// `end_char` occurrences between end-marker hits.
///
/// Every lone occurrence of either char is taken as a nesting signal, even if
/// it is not half of a doubled marker. The cursor moves one char past each
/// end-marker hit, so the second char of a hit is seen again in the next gap.
pub fn find(
    mut cursor: ScanCursor<'_>,
    start_char: char,
    end_char: char,
    end_marker: &str,
) -> Option<usize> {
    let text = cursor.s;
    let mut open: isize = 1;
    loop {
        open -= 1;
        let found = cursor.find_next(end_marker)?;
        let from = cursor.pos();
        let starts = count_occurrences(text, from, found, Needle::Char(start_char));
        let ends = count_occurrences(text, from, found, Needle::Char(end_char));
        open += depth(starts) - depth(ends);
        trace!("short scan: gap {from}..{found} starts={starts} ends={ends} open={open}");
        cursor.seek(found + end_char.len_utf8());
        if open <= 0 {
            return Some(found);
        }
    }
}
