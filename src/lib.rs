//! # layout-oxide
//!
//! Geometric page-layout analysis for PDF documents.
//!
//! Given the flat list of glyph and figure bounding boxes a PDF decoder
//! reports for one page, this crate reconstructs the page's logical
//! structure: text lines, text blocks and figure blocks. It reasons
//! purely about geometry, so it works with any decoder backend that can
//! implement the [`PdfSource`] trait.
//!
//! ## How it works
//!
//! - **Whitespace cover**: an iterated maximum-empty-rectangle search
//!   finds the page's dominant vertical gutters (column gaps, margins).
//! - **Line building**: characters are grouped into lines by horizontal
//!   and vertical proximity, never merging across a gutter.
//! - **Block building**: lines stack into blocks, never merging across a
//!   figure or an unrelated line.
//!
//! Analysis is deterministic, single-threaded and pure per page; distinct
//! pages can be processed on independent threads with independent source
//! handles.
//!
//! ## Quick Start
//!
//! ```no_run
//! use layout_oxide::{Block, PdfLayoutAnalyzer, PdfSource};
//!
//! fn outline<S: PdfSource>(source: S) -> layout_oxide::Result<()> {
//!     let mut analyzer = PdfLayoutAnalyzer::new(source);
//!     for page in 0..analyzer.page_count()? {
//!         for block in analyzer.analyze_page(page)? {
//!             if let Block::Text(text) = block {
//!                 println!("{} lines at {:?}", text.lines.len(), text.bbox);
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `rendering`: PNG debug dumps of analyzed pages via
//!   [`PdfLayoutAnalyzer::enable_debug`], drawn with `tiny-skia`.
//!
//! ## License
//!
//! Licensed under either of Apache License, Version 2.0 or MIT license at
//! your option.

pub mod debug;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod source;

pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size};
pub use layout::{
    Block, FigureBlock, ItemKind, LayoutParams, PageItem, PdfLayoutAnalyzer, TextBlock, TextLine,
};
pub use source::PdfSource;
