//! Page segmentation: characters and figures to lines and blocks.
//!
//! The pipeline runs in geometric stages, each consuming the previous:
//! item intake and sorting, word-separation estimation, whitespace-cover
//! detection, line building and block building. [`PdfLayoutAnalyzer`]
//! drives the stages; the individual modules expose them for direct use
//! and testing.

pub mod analyzer;
pub mod block_builder;
pub mod line_builder;
pub mod page_items;
pub mod params;
pub mod whitespace;
pub mod word_spacing;

// Re-export main types
pub use analyzer::PdfLayoutAnalyzer;
pub use page_items::{Block, FigureBlock, ItemKind, PageItem, TextBlock, TextLine};
pub use params::LayoutParams;
