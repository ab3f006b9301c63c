//! Debug rasterization of analyzed pages.
//!
//! When the `rendering` feature is enabled, a registered [`DebugSink`]
//! renders each analyzed page through its source and strokes the detected
//! gutters, lines and blocks over it, writing one PNG per page. Without
//! the feature the sink is inert. Debugging never changes analysis
//! results.

#[cfg(feature = "rendering")]
mod visualizer;

/// Pages are rendered slightly above their nominal size so thin boxes
/// stay visible.
#[cfg(feature = "rendering")]
pub(crate) const DEBUG_UPSCALE_FACTOR: f32 = 1.3;

/// Destination for per-page debug rasters.
///
/// Output files are named `{basename}-page{index}-layout.png`; the
/// basename may carry a directory prefix.
#[derive(Debug, Clone)]
pub struct DebugSink {
    basename: String,
}

impl DebugSink {
    /// Create a sink writing under the given basename.
    pub fn new(basename: &str) -> Self {
        Self {
            basename: basename.to_string(),
        }
    }

    /// The basename this sink writes under.
    pub fn basename(&self) -> &str {
        &self.basename
    }
}
