//! Simple placeholder substitution renderer.

use svcforge_core::{
    application::ports::TemplateRenderer,
    domain::{RenderContext, RenderedContent, Stub, find_placeholders},
    error::ForgeResult,
};
use tracing::{instrument, trace};

/// Renderer that replaces `$TOKEN$` placeholders in a single pass.
///
/// Tokens the context does not know are kept verbatim and reported in
/// [`RenderedContent::unresolved`].
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(stub = %stub.kind))]
    fn render(&self, stub: &Stub, context: &RenderContext) -> ForgeResult<RenderedContent> {
        let text = context.render(stub.text());
        let unresolved = find_placeholders(&text);
        trace!(bytes = text.len(), unresolved = unresolved.len(), "Stub rendered");
        Ok(RenderedContent { text, unresolved })
    }
}
