//! Document and chapter traversal.

use std::fmt::Write;

use fiets_doc::{Chapter, Document};

use crate::anchor::anchor_id;
use crate::block::write_content;
use crate::config::{MarkerMode, RenderConfig};
use crate::context::RenderContext;
use crate::template::{BOILERPLATE_LEN, write_page_end, write_page_start};
use crate::toc::{TocEntry, collect_toc, section_number};

/// Rough output size per chapter, used to preallocate the page buffer.
const CHAPTER_SIZE_HINT: usize = 2048;

/// Result of rendering a document.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Complete HTML page.
    pub html: String,
    /// Every chapter in document order with its section number.
    pub toc: Vec<TocEntry>,
}

/// Renders a [`Document`] into a self-contained HTML page.
///
/// The renderer holds only configuration. Document-wide data is passed
/// explicitly through each render, so one renderer can be shared across
/// threads and used for any number of documents.
///
/// # Example
///
/// ```
/// use fiets_doc::{Chapter, Document};
/// use fiets_html::{HtmlRenderer, MarkerMode};
///
/// let doc = Document::new("Paper").with_chapter(Chapter::new(1, "Intro"));
/// let result = HtmlRenderer::new()
///     .with_marker_mode(MarkerMode::Placeholder)
///     .render(&doc);
/// assert!(result.html.contains(r#"<h1 data-number="1" id="Intro">"#));
/// assert_eq!(result.toc[0].number, "1");
/// ```
#[derive(Clone, Debug, Default)]
pub struct HtmlRenderer {
    config: RenderConfig,
}

impl HtmlRenderer {
    /// Create a renderer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Choose how `Toc` and `IdentifierDefinition` markers render.
    #[must_use]
    pub fn with_marker_mode(mut self, mode: MarkerMode) -> Self {
        self.config.markers.mode = mode;
        self
    }

    /// Limit nesting of generated tables of contents.
    #[must_use]
    pub fn with_toc_depth(mut self, depth: usize) -> Self {
        self.config.markers.toc_depth = Some(depth);
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a complete HTML page for `document`.
    pub fn render(&self, document: &Document) -> RenderResult {
        let chapter_count = document.chapter_count();
        tracing::debug!(
            title = %document.title,
            chapters = chapter_count,
            references = document.references.len(),
            "Rendering document"
        );

        let ctx = RenderContext::new(document, &self.config);
        let mut html = String::with_capacity(BOILERPLATE_LEN + CHAPTER_SIZE_HINT * (chapter_count + 1));

        write_page_start(&document.title, &mut html);
        for item in &document.content {
            write_content(item, ctx, &mut html);
        }
        write_chapters(&document.chapters, None, ctx, &mut html);
        write_page_end(&mut html);

        tracing::debug!(bytes = html.len(), "Document rendered");

        RenderResult {
            html,
            toc: collect_toc(document),
        }
    }

    /// Render a single chapter (and its sub-chapters) as numbered `number`.
    ///
    /// `document` supplies the reference list and chapter tree for marker
    /// nodes inside the chapter.
    pub fn render_chapter(&self, document: &Document, chapter: &Chapter, number: &str) -> String {
        let mut out = String::with_capacity(CHAPTER_SIZE_HINT * chapter.subtree_len());
        write_chapter(chapter, number, RenderContext::new(document, &self.config), &mut out);
        out
    }
}

/// Render `document` with the default configuration.
///
/// # Examples
///
/// ```
/// use fiets_doc::Document;
///
/// let html = fiets_html::render_document(&Document::new("Empty"));
/// assert!(html.ends_with("</body></html>\n"));
/// ```
pub fn render_document(document: &Document) -> String {
    HtmlRenderer::new().render(document).html
}

fn write_chapters(
    chapters: &[Chapter],
    parent: Option<&str>,
    ctx: RenderContext<'_>,
    out: &mut String,
) {
    for (i, chapter) in chapters.iter().enumerate() {
        let number = section_number(parent, i + 1);
        write_chapter(chapter, &number, ctx, out);
    }
}

fn write_chapter(chapter: &Chapter, number: &str, ctx: RenderContext<'_>, out: &mut String) {
    tracing::trace!(number, level = chapter.level, "Rendering chapter");

    let level = chapter.level;
    let id = anchor_id(&chapter.title);
    let _ = write!(
        out,
        r##"<h{level} data-number="{number}" id="{id}"><span class="header-section-number">{number}</span> {title}<a href="#{id}" class="self-link"></a></h{level}>"##,
        title = chapter.title,
    );

    for item in &chapter.content {
        write_content(item, ctx, out);
    }
    write_chapters(&chapter.chapters, Some(number), ctx, out);
}

#[cfg(test)]
mod tests {
    use fiets_doc::{Content, ReferenceEntry, Span, Table, Text};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::template::{FOOTER, HEAD_END, HEAD_START};

    static_assertions::assert_impl_all!(super::HtmlRenderer: Send, Sync);

    /// Strip the fixed boilerplate and title heading, leaving the body.
    fn body(html: &str, title: &str) -> String {
        let start = format!(
            "{HEAD_START}{title}{HEAD_END}<h1 class=\"title\" style=\"text-align:center\">{title}</h1>"
        );
        html.strip_prefix(&start)
            .and_then(|rest| rest.strip_suffix(FOOTER))
            .expect("page boilerplate")
            .to_owned()
    }

    fn data_numbers(html: &str) -> Vec<&str> {
        html.match_indices("data-number=\"")
            .map(|(pos, pat)| {
                let rest = &html[pos + pat.len()..];
                &rest[..rest.find('"').unwrap()]
            })
            .collect()
    }

    #[test]
    fn test_empty_document_page() {
        let html = render_document(&Document::new("Empty"));
        assert_eq!(body(&html, "Empty"), "");
    }

    #[test]
    fn test_chapter_heading_markup() {
        let doc = Document::new("Doc").with_chapter(Chapter::new(2, "C++ Basics"));
        let html = render_document(&doc);
        assert_eq!(
            body(&html, "Doc"),
            r##"<h2 data-number="1" id="Cpp-Basics"><span class="header-section-number">1</span> C++ Basics<a href="#Cpp-Basics" class="self-link"></a></h2>"##
        );
    }

    #[test]
    fn test_chapter_numbering() {
        let doc = Document::new("Doc")
            .with_chapter(Chapter::new(1, "One"))
            .with_chapter(
                Chapter::new(1, "Two")
                    .with_chapter(Chapter::new(2, "Two A"))
                    .with_chapter(Chapter::new(2, "Two B")),
            );
        let html = render_document(&doc);
        assert_eq!(data_numbers(&html), ["1", "2", "2.1", "2.2"]);
    }

    #[test]
    fn test_deep_numbering() {
        let doc = Document::new("Doc").with_chapter(Chapter::new(1, "A")).with_chapter(
            Chapter::new(1, "B").with_chapter(
                Chapter::new(2, "B1")
                    .with_chapter(Chapter::new(3, "x"))
                    .with_chapter(Chapter::new(3, "y").with_chapter(Chapter::new(4, "z"))),
            ),
        );
        let html = render_document(&doc);
        assert_eq!(data_numbers(&html), ["1", "2", "2.1", "2.1.1", "2.1.2", "2.1.2.1"]);
    }

    #[test]
    fn test_chapter_content_before_subchapters() {
        let doc = Document::new("Doc").with_chapter(
            Chapter::new(1, "A")
                .with_chapter(Chapter::new(2, "Sub"))
                .with_content(Content::paragraph("text"))
                .with_content(Content::code("x")),
        );
        let html = render_document(&doc);
        let body = body(&html, "Doc");
        let para = body.find("<p>text</p>").unwrap();
        let code = body.find("<code>").unwrap();
        let sub = body.find("data-number=\"1.1\"").unwrap();
        assert!(para < code && code < sub);
    }

    #[test]
    fn test_top_level_content_wrapped_and_before_chapters() {
        let doc = Document::new("Doc")
            .with_chapter(Chapter::new(1, "A"))
            .with_content(Content::paragraph("intro"))
            .with_content(Content::list(["x"]));
        let body = body(&render_document(&doc), "Doc");
        assert!(body.starts_with("<p>intro</p><ul><li>x</li></ul><h1 data-number=\"1\""));
    }

    #[test]
    fn test_title_is_in_head_and_heading() {
        let html = render_document(&Document::new("P1234R0: Widgets"));
        assert!(html.contains("<title>\nP1234R0: Widgets</title>"));
        assert!(html.contains(
            r#"<h1 class="title" style="text-align:center">P1234R0: Widgets</h1>"#
        ));
    }

    #[test]
    fn test_references_marker_uses_rendered_document() {
        let first = Document::new("First")
            .with_reference(ReferenceEntry::new("Old", "http://old"))
            .with_chapter(Chapter::new(1, "Refs").with_content(Content::References));
        let second = Document::new("Second")
            .with_reference(ReferenceEntry::new("New", "http://new"))
            .with_chapter(Chapter::new(1, "Refs").with_content(Content::References));

        let renderer = HtmlRenderer::new();
        let first_html = renderer.render(&first).html;
        let second_html = renderer.render(&second).html;

        assert!(first_html.contains(r#"<li><a href="http://old">Old (http://old)</a></li>"#));
        assert!(second_html.contains(r#"<li><a href="http://new">New (http://new)</a></li>"#));
        assert!(!second_html.contains("http://old"));
    }

    #[test]
    fn test_toc_marker_lists_later_chapters() {
        let doc = Document::new("Doc")
            .with_content(Content::Toc)
            .with_chapter(Chapter::new(1, "Intro"))
            .with_chapter(Chapter::new(1, "Design").with_chapter(Chapter::new(2, "API")));
        let body = body(&render_document(&doc), "Doc");
        let toc_end = body.find("</nav>").unwrap();
        assert!(body[..toc_end].contains(r##"<a href="#API"><span class="header-section-number">2.1</span> API</a>"##));
        assert!(body.find(r#"<h1 data-number="1""#).unwrap() > toc_end);
    }

    #[test]
    fn test_toc_depth_builder() {
        let doc = Document::new("Doc")
            .with_content(Content::Toc)
            .with_chapter(Chapter::new(1, "Design").with_chapter(Chapter::new(2, "API")));
        let html = HtmlRenderer::new().with_toc_depth(1).render(&doc).html;
        let toc = &html[html.find("<nav").unwrap()..html.find("</nav>").unwrap()];
        assert!(!toc.contains("API"));
    }

    #[test]
    fn test_placeholder_mode_via_config() {
        let config = RenderConfig::from_toml_str("[markers]\nmode = \"placeholder\"\n").unwrap();
        let doc = Document::new("Doc").with_chapter(
            Chapter::new(1, "A")
                .with_content(Content::Toc)
                .with_content(Content::identifier_definition("x")),
        );
        let renderer = HtmlRenderer::new().with_config(config);
        assert_eq!(renderer.config().markers.mode, MarkerMode::Placeholder);
        let html = renderer.render(&doc).html;
        assert!(html.contains("</h1>TODOTODO</body>"));
    }

    #[test]
    fn test_render_result_toc() {
        let doc = Document::new("Doc")
            .with_chapter(Chapter::new(1, "A").with_chapter(Chapter::new(2, "B")));
        let result = HtmlRenderer::new().render(&doc);
        assert_eq!(
            result.toc,
            vec![
                TocEntry {
                    number: "1".to_owned(),
                    level: 1,
                    title: "A".to_owned(),
                    id: "A".to_owned(),
                },
                TocEntry {
                    number: "1.1".to_owned(),
                    level: 2,
                    title: "B".to_owned(),
                    id: "B".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_render_chapter_with_number() {
        let doc = Document::new("Doc");
        let chapter = Chapter::new(3, "Wording")
            .with_content(Content::paragraph(
                Text::new(vec![Span::deletion("old"), Span::insertion("new")]),
            ))
            .with_chapter(Chapter::new(4, "Details"));
        let html = HtmlRenderer::new().render_chapter(&doc, &chapter, "2.3");
        assert!(html.starts_with(r#"<h3 data-number="2.3" id="Wording">"#));
        assert!(html.contains(
            r#"<p><span class="delete">old</span><span class="new">new</span></p>"#
        ));
        assert!(html.contains(r#"<h4 data-number="2.3.1" id="Details">"#));
    }

    #[test]
    fn test_order_is_preserved() {
        let items = ["alpha", "beta", "gamma"];
        let forward = items
            .iter()
            .fold(Document::new("Doc"), |doc, s| doc.with_content(Content::paragraph(*s)));
        let backward = items
            .iter()
            .rev()
            .fold(Document::new("Doc"), |doc, s| doc.with_content(Content::paragraph(*s)));

        assert_eq!(
            body(&render_document(&forward), "Doc"),
            "<p>alpha</p><p>beta</p><p>gamma</p>"
        );
        assert_eq!(
            body(&render_document(&backward), "Doc"),
            "<p>gamma</p><p>beta</p><p>alpha</p>"
        );
    }

    #[test]
    fn test_chapter_order_is_preserved() {
        let titles = ["Alpha", "Beta", "Gamma"];
        let chapter = |title: &str| {
            Chapter::new(1, title).with_content(Content::paragraph(title.to_lowercase()))
        };
        let forward = titles
            .into_iter()
            .fold(Document::new("Doc"), |doc, t| doc.with_chapter(chapter(t)));
        let backward = titles
            .into_iter()
            .rev()
            .fold(Document::new("Doc"), |doc, t| doc.with_chapter(chapter(t)));

        let forward_html = render_document(&forward);
        let backward_html = render_document(&backward);
        let positions = |html: &str| -> Vec<usize> {
            titles
                .iter()
                .map(|t| html.find(&format!("</span> {t}<a href=")).unwrap())
                .collect()
        };

        let fwd = positions(&forward_html);
        assert!(fwd[0] < fwd[1] && fwd[1] < fwd[2]);
        let bwd = positions(&backward_html);
        assert!(bwd[2] < bwd[1] && bwd[1] < bwd[0]);

        // Numbers follow position, not title.
        assert_eq!(data_numbers(&forward_html), ["1", "2", "3"]);
        assert_eq!(data_numbers(&backward_html), ["1", "2", "3"]);
        assert!(backward_html.contains(
            r##"<h1 data-number="1" id="Gamma"><span class="header-section-number">1</span> Gamma<a href="#Gamma" class="self-link"></a></h1><p>gamma</p>"##
        ));
        assert!(backward_html.contains(
            r##"<h1 data-number="3" id="Alpha"><span class="header-section-number">3</span> Alpha<a href="#Alpha" class="self-link"></a></h1><p>alpha</p>"##
        ));
    }

    #[test]
    fn test_table_inside_chapter() {
        let doc = Document::new("Doc").with_chapter(
            Chapter::new(1, "T").with_content(Table::from_plain([["A", "B"], ["-", "-"], ["1", "2"]])),
        );
        let html = render_document(&doc);
        assert!(html.contains(
            "<table><thead><tr><th>A</th><th>B</th></tr></thead><tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
        ));
    }
}
