//! The page-source abstraction the analyzer consumes.

use crate::error::Result;
use crate::geometry::Size;
use crate::layout::PageItem;

/// Abstraction over a PDF decoder supplying per-page content.
///
/// The analyzer is generic over this trait, so any decoder backend (or an
/// in-memory fixture in tests) can drive the layout pipeline. Methods take
/// `&mut self` because most decoder wrappers cache page state internally.
///
/// Implementations report faults through [`crate::Error`]; the analyzer
/// propagates them to the caller without translation.
pub trait PdfSource {
    /// Number of pages in the document.
    fn page_count(&mut self) -> Result<usize>;

    /// Dimensions of one page, in page units.
    fn page_size(&mut self, page: usize) -> Result<Size>;

    /// Every glyph and figure of one page, with bounding boxes in page
    /// coordinates. Order is decoder-defined; the analyzer sorts.
    fn page_items(&mut self, page: usize) -> Result<Vec<PageItem>>;

    /// Rasterize one page to tightly-packed RGBA bytes at `size`.
    ///
    /// `background` is a 32-bit RGBA color used for the page background.
    /// Only the debug rasterizer calls this; it is never on the analysis
    /// path.
    fn render_page_image(&mut self, page: usize, background: u32, size: Size) -> Result<Vec<u8>>;
}
