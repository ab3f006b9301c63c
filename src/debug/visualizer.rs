//! PNG rendering of analysis stages over the page image.

use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::{DebugSink, DEBUG_UPSCALE_FACTOR};
use crate::error::{Error, Result};
use crate::geometry::{Rect, Size};
use crate::source::PdfSource;

/// Stroke colors, RGBA. Gutters green, lines red, blocks blue.
const GUTTER_COLOR: [u8; 4] = [0, 160, 60, 160];
const LINE_COLOR: [u8; 4] = [220, 40, 40, 200];
const BLOCK_COLOR: [u8; 4] = [40, 60, 220, 200];

const WHITE_BACKGROUND: u32 = 0xffff_ffff;

impl DebugSink {
    /// Render one page with its analysis overlays and write it as PNG.
    pub fn dump_page<S: PdfSource>(
        &self,
        source: &mut S,
        page: usize,
        page_size: Size,
        gutters: &[Rect],
        lines: &[Rect],
        blocks: &[Rect],
    ) -> Result<()> {
        let render_size = page_size.scale(DEBUG_UPSCALE_FACTOR);
        let data = source.render_page_image(page, WHITE_BACKGROUND, render_size)?;

        let width = (render_size.width.ceil() as u32).max(1);
        let height = (render_size.height.ceil() as u32).max(1);
        let size = tiny_skia::IntSize::from_wh(width, height)
            .ok_or_else(|| Error::Render("empty render size".to_string()))?;
        let mut pixmap = Pixmap::from_vec(data, size).ok_or_else(|| {
            Error::Render(format!(
                "pixel buffer does not match {}x{} render size",
                width, height
            ))
        })?;

        stroke_boxes(&mut pixmap, gutters, GUTTER_COLOR);
        stroke_boxes(&mut pixmap, lines, LINE_COLOR);
        stroke_boxes(&mut pixmap, blocks, BLOCK_COLOR);

        let path = format!("{}-page{}-layout.png", self.basename(), page);
        pixmap
            .save_png(&path)
            .map_err(|err| Error::Render(err.to_string()))
    }
}

fn stroke_boxes(pixmap: &mut Pixmap, boxes: &[Rect], rgba: [u8; 4]) {
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]);
    paint.anti_alias = false;

    let stroke = Stroke {
        width: 1.5,
        ..Stroke::default()
    };

    for bbox in boxes {
        let scaled = tiny_skia::Rect::from_xywh(
            bbox.x * DEBUG_UPSCALE_FACTOR,
            bbox.y * DEBUG_UPSCALE_FACTOR,
            bbox.width * DEBUG_UPSCALE_FACTOR,
            bbox.height * DEBUG_UPSCALE_FACTOR,
        );
        let Some(scaled) = scaled else { continue };

        let mut builder = PathBuilder::new();
        builder.push_rect(scaled);
        if let Some(path) = builder.finish() {
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }
}
