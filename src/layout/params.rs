//! Tunable parameters of the segmentation pipeline.

/// Thresholds controlling every stage of page segmentation.
///
/// The defaults are tuned against mixed single- and multi-column documents;
/// changing any of them changes segmentation behavior. All lengths are in
/// page units (PDF points for most decoders).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    /// Shared geometric tolerance. Items no larger than this in either
    /// dimension are discarded at intake, and several overlap tests use it
    /// as their "barely touching" threshold.
    pub min_item_size: f32,

    /// Rounded horizontal gaps narrower than this do not count toward the
    /// word-separation histogram.
    pub min_counted_gap: i32,

    /// The word-separation threshold is the dominant histogram gap times
    /// this multiplier.
    pub word_separation_multiplier: f32,

    /// Gaps wider than this multiple of the mean character width do not
    /// count toward the word-separation histogram (they are layout gaps,
    /// not word gaps).
    pub max_gap_to_mean_char_width_ratio: f32,

    /// A whitespace-cover rectangle must be at least this wide and tall.
    pub min_cover_side: f32,

    /// A whitespace-cover rectangle's width + height must reach this value.
    pub min_cover_perimeter: f32,

    /// Minimum area of a whitespace-cover rectangle.
    pub min_cover_area: f32,

    /// Upper bound on the number of rectangles in the raw whitespace cover.
    pub max_cover_count: usize,

    /// Overlap ratio above which two cover rectangles are considered to
    /// occupy the same span and are merged.
    pub full_overlap_ratio: f32,

    /// Figures larger than this fraction of the page area are treated as
    /// page backgrounds and ignored.
    pub max_figure_area_factor: f32,

    /// Minimum horizontal overlap between a line and a block for the line
    /// to join the block.
    pub min_block_overlap: f32,

    /// A merge is forbidden when a whitespace gutter overlaps the merged
    /// box vertically by more than this.
    pub gutter_overlap_guard: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            min_item_size: 1.0,
            min_counted_gap: 3,
            word_separation_multiplier: 1.5,
            max_gap_to_mean_char_width_ratio: 2.0,
            min_cover_side: 4.0,
            min_cover_perimeter: 128.0,
            min_cover_area: 2048.0,
            max_cover_count: 30,
            full_overlap_ratio: 0.95,
            max_figure_area_factor: 0.5,
            min_block_overlap: 5.0,
            gutter_overlap_guard: 3.0,
        }
    }
}
