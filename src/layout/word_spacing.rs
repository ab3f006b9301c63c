//! Estimation of the page-local word-separation distance.
//!
//! Documents differ wildly in how tightly glyphs are packed, so the gap
//! that separates two words on one page may join two letters on another.
//! This module infers a per-page threshold from the distribution of
//! horizontal gaps between same-row neighbors: the dominant small gap is
//! taken to be the inter-word gap, widened by a tolerance multiplier.

use crate::geometry::Rect;
use crate::layout::page_items::PageItem;
use crate::layout::params::LayoutParams;

/// Arithmetic mean of the character widths, 0.0 for an empty page.
pub fn mean_char_width(chars: &[PageItem]) -> f32 {
    if chars.is_empty() {
        return 0.0;
    }
    chars.iter().map(|c| c.bbox.width).sum::<f32>() / chars.len() as f32
}

/// Horizontal gap between two boxes, rounded half-up to whole page units.
pub(crate) fn rounded_gap(prev: &Rect, this: &Rect) -> i32 {
    (this.left() - prev.right() + 0.5).floor() as i32
}

/// Estimate the distance below which a horizontal gap lies inside a word.
///
/// Builds a histogram over the rounded gaps of vertically-overlapping
/// neighbor pairs in `sorted_chars` (reading order required), smoothing
/// each count into the two neighboring bins, and returns the histogram
/// mode scaled by the tolerance multiplier. Gaps shorter than
/// `min_counted_gap` or wider than `max_gap_to_mean_char_width_ratio`
/// times the mean character width are layout artifacts and are not
/// counted.
///
/// Returns 0.0 for a zero-width page, which makes every gap a word
/// boundary downstream.
pub fn word_separation_threshold(
    sorted_chars: &[PageItem],
    mean_char_width: f32,
    page_width: f32,
    params: &LayoutParams,
) -> f32 {
    let bins = page_width.ceil() as usize;
    if bins == 0 {
        return 0.0;
    }

    let mut histogram = vec![0i32; bins];
    for pair in sorted_chars.windows(2) {
        let (prev, this) = (&pair[0], &pair[1]);
        if this.bbox.vertical_overlap(&prev.bbox) <= params.min_item_size {
            continue;
        }
        let dx = rounded_gap(&prev.bbox, &this.bbox);
        if dx < params.min_counted_gap
            || dx as f32 > params.max_gap_to_mean_char_width_ratio * mean_char_width
        {
            continue;
        }
        let dx = dx as usize;
        if dx < histogram.len() {
            histogram[dx] += 1;
        }
        if dx > 1 {
            histogram[dx - 1] += 1;
        }
        if dx + 1 < histogram.len() {
            histogram[dx + 1] += 1;
        }
    }

    // Mode of the histogram; ties go to the narrowest gap.
    let mut mode = 0;
    let mut best = i32::MIN;
    for (gap, &count) in histogram.iter().enumerate() {
        if count > best {
            best = count;
            mode = gap;
        }
    }

    params.word_separation_multiplier * mode as f32
}
