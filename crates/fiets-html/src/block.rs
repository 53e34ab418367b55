//! Block-level content rendering.

use std::fmt::Write;

use fiets_doc::{Content, ReferenceEntry, Text};

use crate::anchor::anchor_id;
use crate::config::MarkerMode;
use crate::context::RenderContext;
use crate::inline::{write_marked_raw, write_text};
use crate::table::write_table;
use crate::toc::write_toc;

/// Output of `Toc` and `IdentifierDefinition` markers in
/// [`MarkerMode::Placeholder`].
pub const PLACEHOLDER: &str = "TODO";

/// Render one content item of a chapter or of the document preamble.
///
/// Bare text becomes a paragraph; every other item uses its block rule.
pub(crate) fn write_content(item: &Content, ctx: RenderContext<'_>, out: &mut String) {
    match item {
        Content::Text(text) => {
            out.push_str("<p>");
            write_text(text, out);
            out.push_str("</p>");
        }
        Content::Code(code) => {
            out.push_str("<code>");
            write_marked_raw("code", &code.body, out);
            out.push_str("</code>");
        }
        Content::List(list) => write_list("ul", &list.entries, out),
        Content::OrderedList(list) => write_list("ol", &list.entries, out),
        Content::Table(table) => write_table(table, out),
        Content::References => write_references(&ctx.document.references, out),
        Content::Toc => match ctx.config.markers.mode {
            MarkerMode::Generated => {
                write_toc(&ctx.document.chapters, ctx.config.markers.toc_depth, out);
            }
            MarkerMode::Placeholder => out.push_str(PLACEHOLDER),
        },
        Content::IdentifierDefinition(definition) => match ctx.config.markers.mode {
            MarkerMode::Generated => {
                let _ = write!(
                    out,
                    r#"<span class="identifier" id="{}">{}</span>"#,
                    anchor_id(&definition.name),
                    definition.name
                );
            }
            MarkerMode::Placeholder => out.push_str(PLACEHOLDER),
        },
    }
}

fn write_list(tag: &str, entries: &[Text], out: &mut String) {
    let _ = write!(out, "<{tag}>");
    for entry in entries {
        out.push_str("<li>");
        write_text(entry, out);
        out.push_str("</li>");
    }
    let _ = write!(out, "</{tag}>");
}

fn write_references(references: &[ReferenceEntry], out: &mut String) {
    out.push_str("<ol>");
    for reference in references {
        let _ = write!(
            out,
            r#"<li><a href="{url}">{name} ({url})</a></li>"#,
            url = reference.url,
            name = reference.name
        );
    }
    out.push_str("</ol>");
}
