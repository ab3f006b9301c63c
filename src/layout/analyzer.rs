//! The page analysis driver.
//!
//! Ties the pipeline together: item intake, word-separation estimation,
//! whitespace cover, line building and block building, in that order.
//! Analysis is a pure function of the page content; the only side effect
//! is the optional debug rasterization.

use log::debug;

use crate::debug::DebugSink;
use crate::error::Result;
use crate::geometry::{cmp_reading_order, Rect, Size};
use crate::layout::block_builder::{build_blocks, consolidate_figures};
use crate::layout::line_builder::build_lines;
use crate::layout::page_items::{Block, FigureBlock, ItemKind, PageItem, TextLine};
use crate::layout::params::LayoutParams;
use crate::layout::whitespace::find_whitespace_cover;
use crate::layout::word_spacing::{mean_char_width, word_separation_threshold};
use crate::source::PdfSource;

/// Page-layout analyzer over a [`PdfSource`].
///
/// Reconstructs the logical structure of each page (text lines, text
/// blocks, figure blocks) from the flat list of glyph and figure boxes
/// the source reports. Analysis is deterministic for a given source and
/// holds no cross-page state, so one analyzer per thread scales to
/// multi-page workloads.
///
/// # Examples
///
/// ```no_run
/// use layout_oxide::{Block, PdfLayoutAnalyzer, PdfSource};
///
/// fn dump_structure<S: PdfSource>(source: S) -> layout_oxide::Result<()> {
///     let mut analyzer = PdfLayoutAnalyzer::new(source);
///     for page in 0..analyzer.page_count()? {
///         for block in analyzer.analyze_page(page)? {
///             match block {
///                 Block::Text(text) => println!("text {:?}", text.bbox),
///                 Block::Figure(figure) => println!("figure {:?}", figure.bbox),
///             }
///         }
///     }
///     Ok(())
/// }
/// ```
pub struct PdfLayoutAnalyzer<S> {
    source: S,
    params: LayoutParams,
    #[cfg_attr(not(feature = "rendering"), allow(dead_code))]
    debug: Option<DebugSink>,
}

impl<S: PdfSource> PdfLayoutAnalyzer<S> {
    /// Create an analyzer with default parameters.
    pub fn new(source: S) -> Self {
        Self::with_params(source, LayoutParams::default())
    }

    /// Create an analyzer with custom parameters.
    pub fn with_params(source: S, params: LayoutParams) -> Self {
        Self {
            source,
            params,
            debug: None,
        }
    }

    /// The parameters this analyzer runs with.
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Number of pages in the underlying document.
    pub fn page_count(&mut self) -> Result<usize> {
        self.source.page_count()
    }

    /// Register a debug sink writing stage rasters under `basename`.
    ///
    /// Has no effect on analysis results, and none at all unless the
    /// `rendering` feature is enabled. An empty basename is ignored.
    pub fn enable_debug(&mut self, basename: &str) {
        if !basename.is_empty() {
            self.debug = Some(DebugSink::new(basename));
        }
    }

    /// Analyze one page into text blocks followed by figure blocks.
    pub fn analyze_page(&mut self, page: usize) -> Result<Vec<Block>> {
        let page_size = self.source.page_size(page)?;
        let items = self.intake(page)?;
        let (lines, figures, cover) = self.lines_and_figures(items, page_size);

        #[cfg(feature = "rendering")]
        let line_boxes: Vec<Rect> = lines.iter().map(|line| line.bbox).collect();
        #[cfg(not(feature = "rendering"))]
        let _ = &cover;

        let blocks = build_blocks(lines, &figures, &self.params);
        debug!(
            "page {}: {} text blocks, {} figure blocks",
            page,
            blocks.len(),
            figures.len()
        );

        #[cfg(feature = "rendering")]
        if let Some(sink) = self.debug.clone() {
            let block_boxes: Vec<Rect> = blocks.iter().map(|block| block.bbox).collect();
            if let Err(err) = sink.dump_page(
                &mut self.source,
                page,
                page_size,
                &cover,
                &line_boxes,
                &block_boxes,
            ) {
                log::warn!("debug rasterization failed for page {}: {}", page, err);
            }
        }

        let mut result: Vec<Block> = blocks.into_iter().map(Block::Text).collect();
        result.extend(
            figures
                .into_iter()
                .map(|bbox| Block::Figure(FigureBlock { bbox })),
        );
        Ok(result)
    }

    /// Analyze one page into text blocks only.
    ///
    /// Same pipeline as [`analyze_page`](Self::analyze_page), but figure
    /// blocks are not emitted and no debug raster is written.
    pub fn analyze_text_blocks(&mut self, page: usize) -> Result<Vec<Block>> {
        let page_size = self.source.page_size(page)?;
        let items = self.intake(page)?;
        let (lines, figures, _cover) = self.lines_and_figures(items, page_size);
        let blocks = build_blocks(lines, &figures, &self.params);
        Ok(blocks.into_iter().map(Block::Text).collect())
    }

    /// Fetch the page items and drop everything below the size tolerance.
    fn intake(&mut self, page: usize) -> Result<Vec<PageItem>> {
        let mut items = self.source.page_items(page)?;
        let min = self.params.min_item_size;
        items.retain(|item| item.bbox.width > min && item.bbox.height > min);
        Ok(items)
    }

    /// Run the geometric pipeline up to line formation.
    fn lines_and_figures(
        &self,
        items: Vec<PageItem>,
        page_size: Size,
    ) -> (Vec<TextLine>, Vec<Rect>, Vec<Rect>) {
        let (mut figures, mut chars): (Vec<PageItem>, Vec<PageItem>) = items
            .into_iter()
            .partition(|item| item.kind != ItemKind::Char);
        figures.sort_by(|a, b| cmp_reading_order(&a.bbox, &b.bbox));
        chars.sort_by(|a, b| cmp_reading_order(&a.bbox, &b.bbox));

        let mean_width = mean_char_width(&chars);
        let separation =
            word_separation_threshold(&chars, mean_width, page_size.width, &self.params);
        debug!(
            "word separation threshold {:.1} (mean char width {:.1})",
            separation, mean_width
        );

        let cover = find_whitespace_cover(&chars, &figures, page_size, separation, &self.params);
        let consolidated = consolidate_figures(&figures, page_size, &self.params);
        let lines = build_lines(chars, &cover, &consolidated, &self.params);

        (lines, consolidated, cover)
    }
}
