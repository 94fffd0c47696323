use crate::Result;

// ── PdfDocument ───────────────────────────────────────────────────────────────

/// An opened, read-only PDF document owned by one extraction.
///
/// Handles are produced by [`crate::Backend::open`] and released when they
/// are dropped, so every exit path out of an extraction closes the document.
pub trait PdfDocument {
    /// Total number of pages in the document.
    fn page_count(&self) -> usize;

    /// Text of the page at zero-based `index`.
    ///
    /// `Ok(None)` means the backend has no text for this page (for example, a
    /// page without a content stream). `Err` means the backend failed.
    fn page_text(&self, index: usize) -> Result<Option<String>>;
}
