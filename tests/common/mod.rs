//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use layout_oxide::{Error, PageItem, PdfSource, Rect, Result, Size};

/// In-memory page source serving fixed item lists.
pub struct StaticSource {
    pages: Vec<StaticPage>,
}

pub struct StaticPage {
    pub size: Size,
    pub items: Vec<PageItem>,
}

impl StaticSource {
    pub fn new(pages: Vec<StaticPage>) -> Self {
        Self { pages }
    }

    /// A single-page document.
    pub fn single(size: Size, items: Vec<PageItem>) -> Self {
        Self::new(vec![StaticPage { size, items }])
    }

    fn page(&self, page: usize) -> Result<&StaticPage> {
        self.pages.get(page).ok_or(Error::PageOutOfRange {
            index: page,
            count: self.pages.len(),
        })
    }
}

impl PdfSource for StaticSource {
    fn page_count(&mut self) -> Result<usize> {
        Ok(self.pages.len())
    }

    fn page_size(&mut self, page: usize) -> Result<Size> {
        self.page(page).map(|p| p.size)
    }

    fn page_items(&mut self, page: usize) -> Result<Vec<PageItem>> {
        self.page(page).map(|p| p.items.clone())
    }

    fn render_page_image(&mut self, page: usize, _background: u32, size: Size) -> Result<Vec<u8>> {
        self.page(page)?;
        let pixels = (size.width.ceil() as usize).max(1) * (size.height.ceil() as usize).max(1);
        Ok(vec![0xff; pixels * 4])
    }
}

/// Glyph from corner coordinates.
pub fn glyph(ch: char, x0: f32, y0: f32, x1: f32, y1: f32) -> PageItem {
    PageItem::glyph(ch, Rect::from_points(x0, y0, x1, y1))
}

/// Figure from corner coordinates.
pub fn figure(x0: f32, y0: f32, x1: f32, y1: f32) -> PageItem {
    PageItem::figure(Rect::from_points(x0, y0, x1, y1))
}

/// A row of `count` glyphs of width 8 on a 9-unit pitch starting at `x0`.
pub fn tight_row(x0: f32, y: f32, count: usize) -> Vec<PageItem> {
    (0..count)
        .map(|i| PageItem::glyph('x', Rect::new(x0 + 9.0 * i as f32, y, 8.0, 12.0)))
        .collect()
}
