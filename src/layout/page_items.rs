//! Page content representation for layout analysis.
//!
//! This module defines the items a PDF decoder reports for one page and the
//! structures the segmentation pipeline assembles them into: text lines,
//! text blocks and figure blocks.

use crate::geometry::{cmp_left_to_right, Rect};

/// The kind of a decoded page item.
///
/// The layout pipeline only distinguishes characters from everything else;
/// all non-character content (images, drawings, paths) behaves as a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A single glyph with its bounding box
    Char,
    /// Non-text content: image, vector drawing, path fill
    Figure,
}

/// A single item reported by the PDF decoder for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageItem {
    /// Whether this item is a glyph or a figure
    pub kind: ItemKind,
    /// Bounding box in page coordinates
    pub bbox: Rect,
    /// The decoded character, if the decoder reported one (`None` for
    /// figures). Opaque to the geometric analysis.
    pub ch: Option<char>,
}

impl PageItem {
    /// Create a character item.
    pub fn glyph(ch: char, bbox: Rect) -> Self {
        Self {
            kind: ItemKind::Char,
            bbox,
            ch: Some(ch),
        }
    }

    /// Create a figure item.
    pub fn figure(bbox: Rect) -> Self {
        Self {
            kind: ItemKind::Figure,
            bbox,
            ch: None,
        }
    }
}

/// A horizontal run of character items forming one visual text line.
///
/// The bounding box is always the union of the item boxes; in final
/// pipeline output the items are sorted by ascending left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Union of all item bounding boxes
    pub bbox: Rect,
    /// The character items of this line
    pub items: Vec<PageItem>,
}

impl TextLine {
    /// Create a line holding a single item.
    pub fn new(item: PageItem) -> Self {
        Self {
            bbox: item.bbox,
            items: vec![item],
        }
    }

    /// Add an item, growing the bounding box around it.
    pub fn push(&mut self, item: PageItem) {
        self.bbox.union_with(&item.bbox);
        self.items.push(item);
    }

    /// Absorb another line: append its items and union the boxes.
    pub fn merge_with(&mut self, other: TextLine) {
        self.bbox.union_with(&other.bbox);
        self.items.extend(other.items);
    }

    /// Sort the items by ascending left edge.
    pub fn sort_items(&mut self) {
        self.items.sort_by(|a, b| cmp_left_to_right(&a.bbox, &b.bbox));
    }

    /// Collect the decoded characters of this line, left to right.
    pub fn text(&self) -> String {
        self.items.iter().filter_map(|item| item.ch).collect()
    }
}

/// A vertical stack of text lines forming a paragraph or column fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Union of all line bounding boxes
    pub bbox: Rect,
    /// The lines of this block, in assignment order
    pub lines: Vec<TextLine>,
}

/// A figure region of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureBlock {
    /// Consolidated bounding box of the figure
    pub bbox: Rect,
}

/// One logical block of the analyzed page.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A stack of text lines
    Text(TextBlock),
    /// A figure region
    Figure(FigureBlock),
}

impl Block {
    /// Bounding box of the block, whichever variant it is.
    pub fn bbox(&self) -> Rect {
        match self {
            Block::Text(block) => block.bbox,
            Block::Figure(figure) => figure.bbox,
        }
    }

    /// Get the text variant, if this is a text block.
    pub fn as_text(&self) -> Option<&TextBlock> {
        match self {
            Block::Text(block) => Some(block),
            Block::Figure(_) => None,
        }
    }

    /// Get the figure variant, if this is a figure block.
    pub fn as_figure(&self) -> Option<&FigureBlock> {
        match self {
            Block::Text(_) => None,
            Block::Figure(figure) => Some(figure),
        }
    }
}
