use thiserror::Error;

/// How a marker takes part in nesting counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    /// Exactly two identical chars, such as `{{`. Carries the repeated char.
    Short(char),
    /// Anything else: single chars and arbitrary multi-char strings.
    Long,
}

impl MarkerShape {
    pub fn classify(marker: &str) -> Self {
        let mut chars = marker.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) if a == b => Self::Short(a),
            _ => Self::Long,
        }
    }

    pub fn is_short(self) -> bool {
        matches!(self, Self::Short(_))
    }
}

/// The char a marker contributes when counting char by char: the repeated
/// char of a short marker, otherwise its first char.
pub fn counting_char(marker: &str) -> Option<char> {
    match MarkerShape::classify(marker) {
        MarkerShape::Short(c) => Some(c),
        MarkerShape::Long => marker.chars().next(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("start marker must not be empty")]
    EmptyStart,
    #[error("end marker must not be empty")]
    EmptyEnd,
}

/// Checks that both markers of a pair are usable for scanning.
pub fn validate_markers(start: &str, end: &str) -> Result<(), MarkerError> {
    if start.is_empty() {
        return Err(MarkerError::EmptyStart);
    }
    if end.is_empty() {
        return Err(MarkerError::EmptyEnd);
    }
    Ok(())
}

/// A validated start/end marker pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
    start: String,
    end: String,
}

impl MarkerPair {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self, MarkerError> {
        let start = start.into();
        let end = end.into();
        validate_markers(&start, &end)?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}
