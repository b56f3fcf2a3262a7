use crate::error::RenderError;
use houndstitch_layout::Page;

/// A trait for page backends, abstracting over what "drawing" means.
///
/// The paginator produces positioned elements; a renderer consumes them
/// page by page and yields whatever its backing format is (a command
/// stream, bytes, text).
pub trait PageRenderer {
    type Output;

    fn render_page(&mut self, page: &Page) -> Result<(), RenderError>;

    fn finish(self) -> Result<Self::Output, RenderError>;

    /// Render a whole document in page order.
    fn render_document(mut self, pages: &[Page]) -> Result<Self::Output, RenderError>
    where
        Self: Sized,
    {
        for page in pages {
            self.render_page(page)?;
        }
        self.finish()
    }
}
