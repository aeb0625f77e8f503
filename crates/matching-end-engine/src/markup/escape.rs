use std::borrow::Cow;

/// Optional substitutions on top of the always-escaped `& < > "`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeOptions {
    /// Write `\n`, `\r` and `\t` as numeric character references.
    pub escape_whitespace: bool,
    /// Write U+00A0 as `&nbsp;`.
    pub convert_no_break_space: bool,
}

impl Default for EscapeOptions {
    fn default() -> Self {
        Self {
            escape_whitespace: false,
            convert_no_break_space: true,
        }
    }
}

/// Escapes `text` for use in markup content or a double-quoted attribute.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_markup(text: &str, options: EscapeOptions) -> Cow<'_, str> {
    let escaped = html_escape::encode_double_quoted_attribute(text);
    if !escaped.chars().any(|ch| extra_entity(ch, options).is_some()) {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 20);
    for ch in escaped.chars() {
        match extra_entity(ch, options) {
            Some(entity) => out.push_str(entity),
            None => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// [`escape_markup`] with [`EscapeOptions::default`].
pub fn escape_markup_default(text: &str) -> Cow<'_, str> {
    escape_markup(text, EscapeOptions::default())
}

fn extra_entity(ch: char, options: EscapeOptions) -> Option<&'static str> {
    match ch {
        '\n' if options.escape_whitespace => Some("&#10;"),
        '\r' if options.escape_whitespace => Some("&#13;"),
        '\t' if options.escape_whitespace => Some("&#9;"),
        '\u{a0}' if options.convert_no_break_space => Some("&nbsp;"),
        _ => None,
    }
}
