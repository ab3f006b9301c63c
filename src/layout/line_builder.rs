//! Grouping characters into visual text lines.
//!
//! Line building runs in two stages. The assignment stage walks the
//! characters in reading order and greedily attaches each one to a
//! compatible line, refusing any attachment whose merged box would cross
//! a whitespace gutter. The merge stage then stitches together line
//! fragments that belong to one visual row but were built separately,
//! for instance the two halves of a line interrupted by a wide gap;
//! fragments separated by a gutter or a figure stay apart.

use log::debug;

use crate::geometry::Rect;
use crate::layout::page_items::{PageItem, TextLine};
use crate::layout::params::LayoutParams;

/// Whether two boxes are close enough horizontally to share a line.
///
/// Boxes separated by more than 2.5 line heights are considered parts of
/// different lines even when they align vertically.
pub fn on_same_line_horizontally(a: &Rect, b: &Rect) -> bool {
    a.horizontal_overlap(b) > -2.5 * a.height.max(b.height)
}

/// Whether two boxes align vertically closely enough to share a line.
///
/// When one box is less than half the height of the other it is treated
/// as a super- or subscript: any vertical overlap beyond the geometric
/// tolerance counts. Comparable heights must overlap by at least half the
/// smaller one.
pub fn on_same_line_vertically(a: &Rect, b: &Rect, min_item_size: f32) -> bool {
    let overlap = a.vertical_overlap(b);
    if a.height < 0.5 * b.height || b.height < 0.5 * a.height {
        overlap > min_item_size
    } else {
        overlap > 0.5 * a.height.min(b.height)
    }
}

/// Whether a merged box would cross a whitespace gutter.
fn gutter_blocked(merged: &Rect, cover: &[Rect], guard: f32) -> bool {
    cover
        .iter()
        .any(|gutter| gutter.intersects(merged) && gutter.vertical_overlap(merged) > guard)
}

/// Assignment stage: attach each character to a line, or start a new one.
///
/// Characters must arrive in reading order. When several lines qualify,
/// the last one scanned wins; this keeps the result deterministic for a
/// given input order.
pub fn assign_chars_to_lines(
    sorted_chars: Vec<PageItem>,
    cover: &[Rect],
    params: &LayoutParams,
) -> Vec<TextLine> {
    let mut lines: Vec<TextLine> = Vec::new();
    for item in sorted_chars {
        let mut chosen: Option<usize> = None;
        for (i, line) in lines.iter().enumerate() {
            if !on_same_line_horizontally(&item.bbox, &line.bbox)
                || !on_same_line_vertically(&item.bbox, &line.bbox, params.min_item_size)
            {
                continue;
            }
            let merged = line.bbox.union(&item.bbox);
            if gutter_blocked(&merged, cover, params.gutter_overlap_guard) {
                continue;
            }
            chosen = Some(i);
        }
        match chosen {
            Some(i) => lines[i].push(item),
            None => lines.push(TextLine::new(item)),
        }
    }
    lines
}

/// Merge stage: stitch same-row line fragments back together.
///
/// For each surviving line, the live lines on the same visual row whose
/// pairwise union crosses neither a gutter nor a figure are collected and
/// walked left to right, folding them into an accumulator while they stay
/// horizontally disjoint. The walk stops at the first fragment that
/// overlaps the accumulated box. Running the pass on its own output
/// changes nothing.
pub fn merge_line_fragments(
    lines: Vec<TextLine>,
    cover: &[Rect],
    figures: &[Rect],
    params: &LayoutParams,
) -> Vec<TextLine> {
    let mut slots: Vec<Option<TextLine>> = lines.into_iter().map(Some).collect();

    for seed in 0..slots.len() {
        let seed_bbox = match &slots[seed] {
            Some(line) => line.bbox,
            None => continue,
        };

        let mut same_row: Vec<(usize, f32)> = Vec::new();
        for (i, slot) in slots.iter().enumerate() {
            let Some(other) = slot else { continue };
            if !on_same_line_vertically(&seed_bbox, &other.bbox, params.min_item_size) {
                continue;
            }
            let merged = seed_bbox.union(&other.bbox);
            if gutter_blocked(&merged, cover, params.gutter_overlap_guard) {
                continue;
            }
            if figures.iter().any(|figure| merged.intersects(figure)) {
                continue;
            }
            same_row.push((i, other.bbox.left()));
        }
        if same_row.is_empty() {
            continue;
        }
        same_row.sort_by(|a, b| a.1.total_cmp(&b.1));

        let first = same_row[0].0;
        let mut accumulator: Option<TextLine> = None;
        let mut seed_consumed = false;
        for &(i, _) in &same_row {
            let Some(fragment) = slots[i].take() else { continue };
            match accumulator {
                None => {
                    accumulator = Some(fragment);
                    seed_consumed |= i == seed;
                }
                Some(ref mut acc) => {
                    if acc.bbox.horizontal_overlap(&fragment.bbox) > 0.0 {
                        slots[i] = Some(fragment);
                        break;
                    }
                    acc.merge_with(fragment);
                    seed_consumed |= i == seed;
                }
            }
        }

        if seed_consumed {
            slots[seed] = accumulator;
        } else if let Some(acc) = accumulator {
            // The walk stopped short of the seed fragment: the seed keeps
            // its slot and the accumulator returns to the leftmost merged
            // slot, so no glyph is dropped.
            slots[first] = Some(acc);
        }
    }

    let mut result: Vec<TextLine> = slots.into_iter().flatten().collect();
    for line in result.iter_mut() {
        line.sort_items();
    }
    result
}

/// Run both line-building stages.
pub fn build_lines(
    sorted_chars: Vec<PageItem>,
    cover: &[Rect],
    figures: &[Rect],
    params: &LayoutParams,
) -> Vec<TextLine> {
    let char_count = sorted_chars.len();
    let fragments = assign_chars_to_lines(sorted_chars, cover, params);
    let fragment_count = fragments.len();
    let lines = merge_line_fragments(fragments, cover, figures, params);
    debug!(
        "line builder: {} chars -> {} fragments -> {} lines",
        char_count,
        fragment_count,
        lines.len()
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(ch: char, x: f32, y: f32, w: f32, h: f32) -> PageItem {
        PageItem::glyph(ch, Rect::new(x, y, w, h))
    }

    fn row(text: &str, x0: f32, y: f32) -> Vec<PageItem> {
        text.chars()
            .enumerate()
            .map(|(i, ch)| glyph(ch, x0 + 10.0 * i as f32, y, 8.0, 12.0))
            .collect()
    }

    #[test]
    fn test_horizontal_predicate() {
        let a = Rect::new(0.0, 0.0, 10.0, 12.0);
        let near = Rect::new(30.0, 0.0, 10.0, 12.0);
        let far = Rect::new(50.0, 0.0, 10.0, 12.0);
        // Gap 20 is within 2.5 heights (30); gap 40 is beyond it.
        assert!(on_same_line_horizontally(&a, &near));
        assert!(!on_same_line_horizontally(&a, &far));
    }

    #[test]
    fn test_vertical_predicate_equal_heights() {
        let a = Rect::new(0.0, 0.0, 10.0, 12.0);
        let aligned = Rect::new(20.0, 4.0, 10.0, 12.0);
        let offset = Rect::new(20.0, 8.0, 10.0, 12.0);
        assert!(on_same_line_vertically(&a, &aligned, 1.0));
        // Overlap 4 is not more than half the height.
        assert!(!on_same_line_vertically(&a, &offset, 1.0));
    }

    #[test]
    fn test_vertical_predicate_superscript() {
        let base = Rect::new(0.0, 10.0, 10.0, 12.0);
        let superscript = Rect::new(12.0, 7.5, 4.0, 4.0);
        // A quarter-height glyph only needs to clear the tolerance.
        assert!(on_same_line_vertically(&base, &superscript, 1.0));
        let detached = Rect::new(12.0, 2.0, 4.0, 4.0);
        assert!(!on_same_line_vertically(&base, &detached, 1.0));
    }

    #[test]
    fn test_single_row_forms_one_line() {
        let chars = row("abc", 0.0, 0.0);
        let lines = build_lines(chars, &[], &[], &LayoutParams::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "abc");
        assert_eq!(lines[0].bbox, Rect::new(0.0, 0.0, 28.0, 12.0));
    }

    #[test]
    fn test_rows_form_separate_lines() {
        let mut chars = row("ab", 0.0, 0.0);
        chars.extend(row("cd", 0.0, 20.0));
        let lines = build_lines(chars, &[], &[], &LayoutParams::default());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "ab");
        assert_eq!(lines[1].text(), "cd");
    }

    #[test]
    fn test_gutter_blocks_assignment() {
        // Two chars 20 apart would share a line, but a gutter lies between.
        let chars = vec![glyph('a', 0.0, 0.0, 10.0, 12.0), glyph('b', 30.0, 0.0, 10.0, 12.0)];
        let gutter = Rect::new(12.0, 0.0, 16.0, 300.0);
        let lines = build_lines(chars, &[gutter], &[], &LayoutParams::default());
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_fragment_merge_joins_distant_segments() {
        // A gap of 92 exceeds 2.5 heights, so assignment splits the row;
        // the merge stage reunites the fragments.
        let mut chars = row("ab", 0.0, 0.0);
        chars.extend(row("cd", 110.0, 0.0));
        let params = LayoutParams::default();
        let fragments = assign_chars_to_lines(chars, &[], &params);
        assert_eq!(fragments.len(), 2);
        let lines = merge_line_fragments(fragments, &[], &[], &params);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "abcd");
    }

    #[test]
    fn test_fragment_merge_respects_gutters() {
        let mut chars = row("ab", 0.0, 0.0);
        chars.extend(row("cd", 110.0, 0.0));
        let gutter = Rect::new(40.0, 0.0, 30.0, 300.0);
        let params = LayoutParams::default();
        let fragments = assign_chars_to_lines(chars, &[gutter], &params);
        let lines = merge_line_fragments(fragments, &[gutter], &[], &params);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_fragment_merge_respects_figures() {
        // The two halves of the row flank a figure; they must not be
        // stitched into a line running through it.
        let mut chars = row("ab", 0.0, 0.0);
        chars.extend(row("cd", 110.0, 0.0));
        let figure = Rect::new(40.0, 0.0, 30.0, 12.0);
        let params = LayoutParams::default();
        let fragments = assign_chars_to_lines(chars, &[], &params);
        let lines = merge_line_fragments(fragments, &[], &[figure], &params);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_fragment_merge_is_idempotent() {
        let mut chars = row("ab", 0.0, 0.0);
        chars.extend(row("cd", 110.0, 0.0));
        chars.extend(row("ef", 0.0, 20.0));
        let params = LayoutParams::default();
        let once = build_lines(chars, &[], &[], &params);
        let twice = merge_line_fragments(once.clone(), &[], &[], &params);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_items_sorted_left_to_right() {
        // The superscript is attached after its taller neighbors but must
        // come out in x order within the line.
        let chars = vec![
            glyph('a', 0.0, 10.0, 8.0, 12.0),
            glyph('b', 9.0, 10.0, 8.0, 12.0),
            glyph('s', 17.5, 7.5, 4.0, 4.0),
        ];
        let lines = build_lines(chars, &[], &[], &LayoutParams::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "abs");
    }
}
