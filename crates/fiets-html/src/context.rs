//! Render-scoped state shared by every node of one document render.

use fiets_doc::Document;

use crate::config::RenderConfig;

/// Read-only view of the document being rendered.
///
/// Created once per [`HtmlRenderer::render`](crate::HtmlRenderer::render)
/// call and threaded through every rendering function that needs
/// document-wide data (the reference list, the chapter tree for a table of
/// contents). It borrows the document, so it cannot outlive the render and
/// nothing carries over into the next one.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RenderContext<'a> {
    pub document: &'a Document,
    pub config: &'a RenderConfig,
}

impl<'a> RenderContext<'a> {
    pub fn new(document: &'a Document, config: &'a RenderConfig) -> Self {
        Self { document, config }
    }
}
