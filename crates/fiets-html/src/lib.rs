//! Single-page HTML renderer for fiets documents.
//!
//! [`HtmlRenderer`] turns a [`fiets_doc::Document`] into one self-contained
//! HTML page: fixed head and stylesheet, a centered title, the document's
//! leading content, then every chapter with a computed section number
//! (`1`, `2`, `2.1`, ...).
//!
//! # Architecture
//!
//! Rendering is plain structural recursion over the immutable tree:
//! - inline spans ([`render_text`]): escaped plain text, marker spans, numbered
//!   reference links
//! - block content: code, lists, tables ([`has_header`] infers header rows),
//!   the reference list and the table of contents
//! - chapters: heading with anchor ([`anchor_id`]) and self-link, content,
//!   then sub-chapters
//!
//! Document-wide data (the reference list, the chapter tree) is passed to
//! each node through an explicit per-render context rather than global state,
//! so renders never observe each other.
//!
//! # Example
//!
//! ```
//! use fiets_doc::{Chapter, Content, Document, ReferenceEntry};
//! use fiets_html::HtmlRenderer;
//!
//! let doc = Document::new("Widgets")
//!     .with_reference(ReferenceEntry::new("N4861", "https://wg21.link/n4861"))
//!     .with_chapter(Chapter::new(1, "Bibliography").with_content(Content::References));
//!
//! let result = HtmlRenderer::new().render(&doc);
//! assert!(result.html.contains("N4861 (https://wg21.link/n4861)"));
//! ```

mod anchor;
mod block;
mod config;
mod context;
mod escape;
mod inline;
mod renderer;
mod table;
mod template;
mod toc;

pub use anchor::anchor_id;
pub use block::PLACEHOLDER;
pub use config::{ConfigError, MarkerConfig, MarkerMode, RenderConfig};
pub use escape::escape_html;
pub use inline::render_text;
pub use renderer::{HtmlRenderer, RenderResult, render_document};
pub use table::has_header;
pub use template::{FOOTER, HEAD_END, HEAD_START};
pub use toc::{TocEntry, collect_toc};
