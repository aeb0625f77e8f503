use super::cursor::ceil_char_boundary;

/// What [`count_occurrences`] looks for: a single char or a whole string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Needle<'a> {
    Char(char),
    Str(&'a str),
}

impl Needle<'_> {
    /// Byte length the search skips after each hit.
    pub fn len(self) -> usize {
        match self {
            Needle::Char(c) => c.len_utf8(),
            Needle::Str(s) => s.len(),
        }
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Counts non-overlapping occurrences of `needle` whose start offset lies in
/// `[from, min(text.len(), to_excluding))`.
///
/// An occurrence that starts inside the range but runs past its end still
/// counts. After each hit the search resumes past the whole needle, so `"aa"`
/// occurs twice in `"aaaa"`, not three times. An empty needle counts zero.
pub fn count_occurrences(text: &str, from: usize, to_excluding: usize, needle: Needle<'_>) -> usize {
    let limit = text.len().min(to_excluding);
    let from = ceil_char_boundary(text, from);
    if from >= limit || needle.is_empty() {
        return 0;
    }
    let haystack = &text[from..];
    let window = limit - from;
    match needle {
        Needle::Char(c) => starts_before(haystack.match_indices(c), window),
        Needle::Str(s) => starts_before(haystack.match_indices(s), window),
    }
}

fn starts_before<'h>(hits: impl Iterator<Item = (usize, &'h str)>, limit: usize) -> usize {
    hits.take_while(|&(at, _)| at < limit).count()
}
