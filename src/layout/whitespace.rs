//! Whitespace-cover detection: the large empty rectangles of a page.
//!
//! Column gutters, wide margins and the bands around figures are the
//! strongest geometric evidence of page structure. This module finds
//! them by an iterated maximum-empty-rectangle search over the page:
//! characters are first coalesced into word-level blobs (so the tiny
//! gaps between letters do not fragment the search space), then a
//! best-first search repeatedly extracts the highest-scoring rectangle
//! that avoids every blob. The resulting vertical gutters act as
//! barriers in the line and block builders.

use log::debug;

use crate::geometry::{Rect, Size};
use crate::layout::page_items::PageItem;
use crate::layout::params::LayoutParams;
use crate::layout::word_spacing::rounded_gap;

/// Coalesce characters into word-level blobs and add the small figures.
///
/// Consecutive characters in reading order are merged into one blob while
/// they stay on the same visual row and the gap between them is below the
/// word-separation threshold. Figures larger than the background-area
/// cutoff are ignored; the rest join the obstacle set as-is.
pub fn assemble_blobs(
    sorted_chars: &[PageItem],
    sorted_figures: &[PageItem],
    page_size: Size,
    word_separation: f32,
    params: &LayoutParams,
) -> Vec<Rect> {
    let mut blobs: Vec<Rect> = Vec::new();
    let mut prev: Option<&PageItem> = None;
    for item in sorted_chars {
        let mut extended = false;
        if let (Some(prev_item), Some(last)) = (prev, blobs.last_mut()) {
            if item.kind == prev_item.kind
                && item.bbox.vertical_overlap_ratio(&prev_item.bbox) > 0.5
                && (rounded_gap(&prev_item.bbox, &item.bbox) as f32) < word_separation
            {
                last.union_with(&item.bbox);
                extended = true;
            }
        }
        if !extended {
            blobs.push(item.bbox);
        }
        prev = Some(item);
    }

    let max_figure_area = params.max_figure_area_factor * page_size.area();
    for figure in sorted_figures {
        if figure.bbox.area() <= max_figure_area {
            blobs.push(figure.bbox);
        }
    }

    blobs
}

/// The fixed-threshold test every cover rectangle must pass.
fn accepts(rect: &Rect, params: &LayoutParams) -> bool {
    rect.width >= params.min_cover_side
        && rect.height >= params.min_cover_side
        && rect.width + rect.height >= params.min_cover_perimeter
        && rect.area() >= params.min_cover_area
}

/// Tall rectangles make better gutters; width is a tiebreaker.
fn cover_score(rect: &Rect) -> f32 {
    rect.height + 0.1 * rect.width
}

/// Best-first search for the highest-scoring empty rectangle in `bounds`.
///
/// The working set holds candidate rectangles with the obstacles that
/// still intersect them. Each step takes the best candidate; if it is
/// obstacle-free it is the answer, otherwise it is split around its
/// largest obstacle into the four flanking rectangles and the acceptable
/// flanks re-enter the set. Returns a degenerate rectangle when the
/// search space is exhausted.
fn next_largest_cover(bounds: Rect, obstacles: &[Rect], params: &LayoutParams) -> Rect {
    struct Candidate {
        score: f32,
        rect: Rect,
        obstacles: Vec<Rect>,
    }

    let mut candidates = vec![Candidate {
        score: cover_score(&bounds),
        rect: bounds,
        obstacles: obstacles.to_vec(),
    }];

    loop {
        if candidates.is_empty() {
            return Rect::default();
        }

        // Candidates failing the acceptance test score -1 so that any
        // acceptable rectangle outranks them.
        let mut best = 0;
        let mut best_score = f32::MIN;
        for (i, candidate) in candidates.iter().enumerate() {
            let effective = if accepts(&candidate.rect, params) {
                candidate.score
            } else {
                -1.0
            };
            if effective > best_score {
                best_score = effective;
                best = i;
            }
        }

        let chosen = candidates.remove(best);
        if best_score < 1.0 || chosen.obstacles.is_empty() {
            return chosen.rect;
        }

        // Split around the largest obstacle; first one wins a tie.
        let mut pivot = chosen.obstacles[0];
        for obstacle in &chosen.obstacles[1..] {
            if obstacle.area() > pivot.area() {
                pivot = *obstacle;
            }
        }

        let cover = chosen.rect;
        let flanks = [
            Rect::from_points(pivot.right(), cover.top(), cover.right(), cover.bottom()),
            Rect::from_points(cover.left(), cover.top(), pivot.left(), cover.bottom()),
            Rect::from_points(cover.left(), pivot.bottom(), cover.right(), cover.bottom()),
            Rect::from_points(cover.left(), cover.top(), cover.right(), pivot.top()),
        ];
        for flank in flanks {
            if !accepts(&flank, params) {
                continue;
            }
            let remaining: Vec<Rect> = chosen
                .obstacles
                .iter()
                .filter(|obstacle| obstacle.intersects(&flank))
                .copied()
                .collect();
            candidates.push(Candidate {
                score: cover_score(&flank),
                rect: flank,
                obstacles: remaining,
            });
        }
    }
}

/// Compute the whitespace cover of a page: its vertical gutters.
///
/// Runs the empty-rectangle search repeatedly, feeding every found
/// rectangle back as an obstacle so later rounds find fresh whitespace.
/// The raw cover is then reduced to verticals: horizontal members only
/// stretch the verticals they align with, and near-coincident verticals
/// are merged.
pub fn find_whitespace_cover(
    sorted_chars: &[PageItem],
    sorted_figures: &[PageItem],
    page_size: Size,
    word_separation: f32,
    params: &LayoutParams,
) -> Vec<Rect> {
    let blobs = assemble_blobs(
        sorted_chars,
        sorted_figures,
        page_size,
        word_separation,
        params,
    );

    let bounds = Rect::from_size(page_size);
    let mut obstacles = blobs;
    let mut raw: Vec<Rect> = Vec::new();
    for _ in 0..params.max_cover_count {
        let next = next_largest_cover(bounds, &obstacles, params);
        if !accepts(&next, params) {
            break;
        }
        raw.push(next);
        obstacles.push(next);
    }
    let raw_count = raw.len();

    // Keep the verticals; horizontals only donate their vertical reach to
    // the verticals whose x-span they cover.
    let (mut verticals, horizontals): (Vec<Rect>, Vec<Rect>) =
        raw.into_iter().partition(|r| r.width < r.height);
    for vertical in verticals.iter_mut() {
        for horizontal in &horizontals {
            if vertical.horizontal_overlap(horizontal)
                >= params.full_overlap_ratio * vertical.width
                && vertical.vertical_overlap(horizontal) > -params.min_item_size
            {
                let y0 = vertical.top().min(horizontal.top());
                let y1 = vertical.bottom().max(horizontal.bottom());
                vertical.y = y0;
                vertical.height = y1 - y0;
            }
        }
    }

    // Merge verticals that occupy the same x-span.
    let mut cover: Vec<Rect> = Vec::new();
    for candidate in verticals {
        let mut merged = false;
        for stored in cover.iter_mut() {
            if stored.intersects(&candidate)
                && stored.horizontal_overlap_ratio(&candidate) >= params.full_overlap_ratio
            {
                stored.union_with(&candidate);
                merged = true;
            }
        }
        if !merged {
            cover.push(candidate);
        }
    }

    debug!(
        "whitespace cover: {} raw rectangles reduced to {} vertical gutters",
        raw_count,
        cover.len()
    );
    cover
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(x: f32, y: f32, w: f32, h: f32) -> PageItem {
        PageItem::glyph('x', Rect::new(x, y, w, h))
    }

    #[test]
    fn test_blobs_merge_within_threshold() {
        // Three chars with gaps of 2: below a threshold of 4 they blob.
        let chars = vec![
            glyph(0.0, 0.0, 8.0, 12.0),
            glyph(10.0, 0.0, 8.0, 12.0),
            glyph(20.0, 0.0, 8.0, 12.0),
        ];
        let blobs = assemble_blobs(
            &chars,
            &[],
            Size::new(100.0, 20.0),
            4.0,
            &LayoutParams::default(),
        );
        assert_eq!(blobs, vec![Rect::new(0.0, 0.0, 28.0, 12.0)]);
    }

    #[test]
    fn test_blobs_split_at_wide_gaps() {
        let chars = vec![glyph(0.0, 0.0, 8.0, 12.0), glyph(20.0, 0.0, 8.0, 12.0)];
        let blobs = assemble_blobs(
            &chars,
            &[],
            Size::new(100.0, 20.0),
            4.0,
            &LayoutParams::default(),
        );
        assert_eq!(blobs.len(), 2);
    }

    #[test]
    fn test_blobs_split_between_rows() {
        // Vertical overlap ratio 0 between rows: no merge even at gap 0.
        let chars = vec![glyph(0.0, 0.0, 8.0, 12.0), glyph(0.0, 14.0, 8.0, 12.0)];
        let blobs = assemble_blobs(
            &chars,
            &[],
            Size::new(100.0, 40.0),
            4.0,
            &LayoutParams::default(),
        );
        assert_eq!(blobs.len(), 2);
    }

    #[test]
    fn test_background_figures_are_not_obstacles() {
        let figures = vec![
            PageItem::figure(Rect::new(0.0, 0.0, 100.0, 100.0)),
            PageItem::figure(Rect::new(10.0, 10.0, 20.0, 20.0)),
        ];
        let blobs = assemble_blobs(
            &[],
            &figures,
            Size::new(100.0, 100.0),
            0.0,
            &LayoutParams::default(),
        );
        // The page-sized figure exceeds half the page area and is dropped.
        assert_eq!(blobs, vec![Rect::new(10.0, 10.0, 20.0, 20.0)]);
    }

    #[test]
    fn test_acceptance_thresholds() {
        let params = LayoutParams::default();
        assert!(accepts(&Rect::new(0.0, 0.0, 40.0, 100.0), &params));
        // Too slim
        assert!(!accepts(&Rect::new(0.0, 0.0, 3.0, 300.0), &params));
        // Perimeter too small
        assert!(!accepts(&Rect::new(0.0, 0.0, 60.0, 60.0), &params));
        // Area too small
        assert!(!accepts(&Rect::new(0.0, 0.0, 8.0, 200.0), &params));
        // Degenerate
        assert!(!accepts(&Rect::default(), &params));
    }

    #[test]
    fn test_score_prefers_tall_rectangles() {
        let tall = Rect::new(0.0, 0.0, 30.0, 300.0);
        let wide = Rect::new(0.0, 0.0, 300.0, 30.0);
        assert!(cover_score(&tall) > cover_score(&wide));
    }

    #[test]
    fn test_search_returns_bounds_when_empty() {
        let bounds = Rect::new(0.0, 0.0, 400.0, 300.0);
        let found = next_largest_cover(bounds, &[], &LayoutParams::default());
        assert_eq!(found, bounds);
    }

    #[test]
    fn test_search_exhausts_on_crowded_page() {
        // One obstacle covering nearly everything: no acceptable flank.
        let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
        let obstacles = vec![Rect::new(1.0, 1.0, 198.0, 198.0)];
        let found = next_largest_cover(bounds, &obstacles, &LayoutParams::default());
        assert!(!accepts(&found, &LayoutParams::default()));
    }

    #[test]
    fn test_column_gutter_is_found() {
        // Two text columns; the band between them is the best gutter.
        let chars = vec![glyph(20.0, 20.0, 160.0, 140.0), glyph(220.0, 20.0, 160.0, 140.0)];
        let cover = find_whitespace_cover(
            &chars,
            &[],
            Size::new(400.0, 300.0),
            0.0,
            &LayoutParams::default(),
        );
        let gutter = cover
            .iter()
            .find(|g| (g.left() - 180.0).abs() < 1e-3 && (g.right() - 220.0).abs() < 1e-3);
        let gutter = gutter.expect("central gutter not detected");
        assert!(gutter.height >= 250.0);
    }

    #[test]
    fn test_no_cover_on_tiny_page() {
        let chars = vec![glyph(0.0, 2.0, 8.0, 12.0)];
        let cover = find_whitespace_cover(
            &chars,
            &[],
            Size::new(100.0, 20.0),
            0.0,
            &LayoutParams::default(),
        );
        assert!(cover.is_empty());
    }

    #[test]
    fn test_central_gutter_not_duplicated() {
        // Successive search rounds see earlier results as obstacles, so
        // the band between two full-height columns surfaces exactly once.
        let chars = vec![glyph(20.0, 0.0, 160.0, 300.0), glyph(220.0, 0.0, 160.0, 300.0)];
        let cover = find_whitespace_cover(
            &chars,
            &[],
            Size::new(400.0, 300.0),
            0.0,
            &LayoutParams::default(),
        );
        let central: Vec<&Rect> = cover
            .iter()
            .filter(|g| g.left() >= 175.0 && g.right() <= 225.0)
            .collect();
        assert_eq!(central.len(), 1);
    }
}
