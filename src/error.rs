//! Error types for the layout analysis library.
//!
//! The analysis core itself is total over well-formed geometry and never
//! fails; every error originates at the [`PdfSource`](crate::source::PdfSource)
//! boundary and is propagated to the caller unchanged.

/// Result type alias for layout analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can cross the page-source boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested page index is beyond the document's page count.
    #[error("Page index {index} out of range: document has {count} pages")]
    PageOutOfRange {
        /// Requested zero-based page index
        index: usize,
        /// Number of pages the source reports
        count: usize,
    },

    /// The underlying PDF decoder failed to produce a page.
    #[error("PDF source error: {0}")]
    Source(String),

    /// Debug rasterization failed (malformed pixel buffer, PNG encoding).
    #[error("Render error: {0}")]
    Render(String),

    /// IO error (debug image output).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
