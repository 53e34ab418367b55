//! Inline rendering of [`Text`] and its spans.

use std::fmt::Write;

use fiets_doc::{Span, Text};

use crate::escape::push_escaped;

/// Render a text run to HTML.
///
/// Spans are rendered in order and concatenated without separators.
///
/// # Examples
///
/// ```
/// use fiets_doc::{Span, Text};
/// use fiets_html::render_text;
///
/// let text = Text::plain("see ").with(Span::reference(3, "http://x"));
/// assert_eq!(render_text(&text), r#"see <a href="http://x">[3]</a>"#);
/// ```
#[must_use]
pub fn render_text(text: &Text) -> String {
    let mut out = String::new();
    write_text(text, &mut out);
    out
}

pub(crate) fn write_text(text: &Text, out: &mut String) {
    for span in &text.spans {
        write_span(span, out);
    }
}

fn write_span(span: &Span, out: &mut String) {
    match span {
        Span::Plain(s) => push_escaped(s, out),
        Span::Insertion(inner) => write_marked_text("new", inner, out),
        Span::Deletion(inner) => write_marked_text("delete", inner, out),
        // Emitted verbatim, unescaped.
        Span::Identifier(s) => write_marked_raw("identifier", s, out),
        Span::CodeSpan(s) => write_marked_raw("code", s, out),
        Span::Reference(reference) => {
            let _ = write!(
                out,
                r#"<a href="{}">[{}]</a>"#,
                reference.url, reference.index
            );
        }
    }
}

fn write_marked_text(class: &str, inner: &Text, out: &mut String) {
    let _ = write!(out, r#"<span class="{class}">"#);
    write_text(inner, out);
    out.push_str("</span>");
}

pub(crate) fn write_marked_raw(class: &str, raw: &str, out: &mut String) {
    let _ = write!(out, r#"<span class="{class}">{raw}</span>"#);
}
