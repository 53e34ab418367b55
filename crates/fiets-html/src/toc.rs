//! Section numbering and table of contents.

use std::fmt::Write;

use fiets_doc::{Chapter, Document};
use serde::Serialize;

use crate::anchor::anchor_id;

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Dotted section number (`"2.1"`).
    pub number: String,
    /// Heading level as stored on the chapter.
    pub level: u32,
    /// Chapter title.
    pub title: String,
    /// Anchor ID for linking.
    pub id: String,
}

/// Number of the chapter at 1-based `position` below `parent`.
///
/// Top-level chapters have no parent and are numbered `1`, `2`, ...
pub(crate) fn section_number(parent: Option<&str>, position: usize) -> String {
    match parent {
        Some(parent) => format!("{parent}.{position}"),
        None => position.to_string(),
    }
}

/// Collect every chapter of `document` in pre-order with its section number.
///
/// # Examples
///
/// ```
/// use fiets_doc::{Chapter, Document};
/// use fiets_html::collect_toc;
///
/// let doc = Document::new("Doc")
///     .with_chapter(Chapter::new(1, "Intro"))
///     .with_chapter(Chapter::new(1, "Design").with_chapter(Chapter::new(2, "API")));
/// let numbers: Vec<_> = collect_toc(&doc).into_iter().map(|e| e.number).collect();
/// assert_eq!(numbers, ["1", "2", "2.1"]);
/// ```
pub fn collect_toc(document: &Document) -> Vec<TocEntry> {
    let mut entries = Vec::with_capacity(document.chapter_count());
    collect_chapters(&document.chapters, None, &mut entries);
    entries
}

fn collect_chapters(chapters: &[Chapter], parent: Option<&str>, entries: &mut Vec<TocEntry>) {
    for (i, chapter) in chapters.iter().enumerate() {
        let number = section_number(parent, i + 1);
        entries.push(TocEntry {
            number: number.clone(),
            level: chapter.level,
            title: chapter.title.clone(),
            id: anchor_id(&chapter.title),
        });
        collect_chapters(&chapter.chapters, Some(&number), entries);
    }
}

/// Write a nested table of contents for `chapters`.
///
/// `max_depth` limits nesting: 1 lists top-level chapters only.
pub(crate) fn write_toc(chapters: &[Chapter], max_depth: Option<usize>, out: &mut String) {
    out.push_str(r#"<nav class="toc">"#);
    if !chapters.is_empty() {
        write_toc_list(chapters, None, 1, max_depth, out);
    }
    out.push_str("</nav>");
}

fn write_toc_list(
    chapters: &[Chapter],
    parent: Option<&str>,
    depth: usize,
    max_depth: Option<usize>,
    out: &mut String,
) {
    out.push_str("<ol>");
    for (i, chapter) in chapters.iter().enumerate() {
        let number = section_number(parent, i + 1);
        let _ = write!(
            out,
            r##"<li><a href="#{}"><span class="header-section-number">{number}</span> {}</a>"##,
            anchor_id(&chapter.title),
            chapter.title,
        );
        if !chapter.chapters.is_empty() && max_depth.is_none_or(|max| depth < max) {
            write_toc_list(&chapter.chapters, Some(&number), depth + 1, max_depth, out);
        }
        out.push_str("</li>");
    }
    out.push_str("</ol>");
}
