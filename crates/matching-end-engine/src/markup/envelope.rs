use super::escape::escape_markup_default;

pub const CDATA_START: &str = "<![CDATA[";
pub const CDATA_END: &str = "]]>";
pub const HTML_START: &str = "<html>";
pub const BODY_START: &str = "<body>";
pub const HTML_END: &str = "</html>";
pub const BODY_END: &str = "</body>";

/// Wraps `text` in CDATA sections.
///
/// A CDATA section cannot contain `]]>`, so every occurrence closes the
/// current section and is written escaped between two sections.
/// Empty input yields an empty string.
pub fn wrap_in_cdata(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + CDATA_START.len() + CDATA_END.len());
    let mut rest = text;
    while !rest.is_empty() {
        let Some(at) = rest.find(CDATA_END) else {
            push_cdata_section(&mut out, rest);
            break;
        };
        push_cdata_section(&mut out, &rest[..at]);
        out.push_str(&escape_markup_default(CDATA_END));
        rest = &rest[at + CDATA_END.len()..];
    }
    out
}

fn push_cdata_section(out: &mut String, body: &str) {
    out.push_str(CDATA_START);
    out.push_str(body);
    out.push_str(CDATA_END);
}

pub fn wrap_in_html(text: &str) -> String {
    format!("{HTML_START}{text}{HTML_END}")
}

/// True if `text` starts with `<html>` and ends with `</html>`, ignoring
/// ASCII case.
pub fn is_wrapped_in_html(text: &str) -> bool {
    let starts = text
        .get(..HTML_START.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(HTML_START));
    let ends = text
        .len()
        .checked_sub(HTML_END.len())
        .and_then(|at| text.get(at..))
        .is_some_and(|tail| tail.eq_ignore_ascii_case(HTML_END));
    starts && ends
}

/// Removes one leading `<html>` then one `<body>`, and one trailing
/// `</html>` then one `</body>`. Matching is case-sensitive.
pub fn strip_html(text: &str) -> &str {
    let text = text.strip_prefix(HTML_START).unwrap_or(text);
    let text = text.strip_prefix(BODY_START).unwrap_or(text);
    let text = text.strip_suffix(HTML_END).unwrap_or(text);
    text.strip_suffix(BODY_END).unwrap_or(text)
}
