//! Escaping for plain text spans.

/// Escape angle brackets in plain text.
///
/// Only `<` and `>` are replaced. Ampersands and quotes pass through
/// unchanged.
///
/// # Examples
///
/// ```
/// use fiets_html::escape_html;
///
/// assert_eq!(escape_html("a<b>c<d"), "a&lt;b&gt;c&lt;d");
/// assert_eq!(escape_html("&amp; \"q\""), "&amp; \"q\"");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(text, &mut out);
    out
}

/// Append `text` to `out` with angle brackets escaped.
pub(crate) fn push_escaped(text: &str, out: &mut String) {
    let mut rest = text;
    while let Some(pos) = rest.find(['<', '>']) {
        out.push_str(&rest[..pos]);
        out.push_str(if rest.as_bytes()[pos] == b'<' {
            "&lt;"
        } else {
            "&gt;"
        });
        rest = &rest[pos + 1..];
    }
    out.push_str(rest);
}
