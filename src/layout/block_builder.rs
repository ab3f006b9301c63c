//! Grouping text lines into blocks and consolidating figures.
//!
//! A block is a vertical stack of lines. Lines are taken in column order
//! and greedily attached to the first existing block they overlap
//! horizontally, unless the merged box would swallow a figure or an
//! unrelated line. Unlike line assignment, the first acceptable block
//! wins; both tie-break rules are load-bearing for determinism.

use log::debug;

use crate::geometry::{cmp_columnwise, Rect, Size};
use crate::layout::page_items::{PageItem, TextBlock, TextLine};
use crate::layout::params::LayoutParams;

/// Reduce the page's figures to disjoint display regions.
///
/// Figures above the background-area cutoff are dropped. The rest are
/// walked in reading order; a figure intersecting an already-kept region
/// is absorbed into it, everything else starts a new region.
pub fn consolidate_figures(
    sorted_figures: &[PageItem],
    page_size: Size,
    params: &LayoutParams,
) -> Vec<Rect> {
    let max_area = params.max_figure_area_factor * page_size.area();
    let mut figures: Vec<Rect> = Vec::new();
    for item in sorted_figures {
        if item.bbox.area() > max_area {
            continue;
        }
        match figures.iter().position(|f| f.intersects(&item.bbox)) {
            Some(i) => figures[i].union_with(&item.bbox),
            None => figures.push(item.bbox),
        }
    }
    figures
}

/// Group lines into text blocks, blocked by figures and stray lines.
///
/// A line may join a block when their horizontal overlap reaches the
/// block threshold and the merged box touches neither a figure nor any
/// line outside the block. A line spanning both the candidate line and
/// the block by more than a line height is a natural bridge between them
/// and does not block the merge.
pub fn build_blocks(lines: Vec<TextLine>, figures: &[Rect], params: &LayoutParams) -> Vec<TextBlock> {
    let mut sorted = lines;
    sorted.sort_by(|a, b| cmp_columnwise(&a.bbox, &b.bbox));

    struct Draft {
        bbox: Rect,
        members: Vec<usize>,
    }
    let mut drafts: Vec<Draft> = Vec::new();

    for current in 0..sorted.len() {
        let line_bbox = sorted[current].bbox;
        let line_height = line_bbox.height;
        let mut chosen: Option<usize> = None;

        'drafts: for (di, draft) in drafts.iter().enumerate() {
            if draft.bbox.horizontal_overlap(&line_bbox) < params.min_block_overlap {
                continue;
            }
            let merged = draft.bbox.union(&line_bbox);
            for figure in figures {
                if merged.intersects(figure) {
                    continue 'drafts;
                }
            }
            for (other, other_line) in sorted.iter().enumerate() {
                if other == current {
                    continue;
                }
                if other_line.bbox.horizontal_overlap(&line_bbox) > line_height
                    && other_line.bbox.horizontal_overlap(&draft.bbox) > line_height
                {
                    continue;
                }
                if draft.members.contains(&other) {
                    continue;
                }
                if merged.intersects(&other_line.bbox) {
                    continue 'drafts;
                }
            }
            chosen = Some(di);
            break;
        }

        match chosen {
            Some(di) => {
                drafts[di].bbox.union_with(&line_bbox);
                drafts[di].members.push(current);
            }
            None => drafts.push(Draft {
                bbox: line_bbox,
                members: vec![current],
            }),
        }
    }

    debug!("block builder: {} lines -> {} blocks", sorted.len(), drafts.len());

    let mut slots: Vec<Option<TextLine>> = sorted.into_iter().map(Some).collect();
    drafts
        .into_iter()
        .map(|draft| TextBlock {
            bbox: draft.bbox,
            lines: draft.members.iter().filter_map(|&i| slots[i].take()).collect(),
        })
        .collect()
}
