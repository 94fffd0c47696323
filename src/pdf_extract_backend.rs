use crate::{Backend, ExtractError, PdfDocument, Result};
use std::path::Path;

// ── PdfExtractDocument ────────────────────────────────────────────────────────

/// A document whose pages were decoded by pdf-extract.
///
/// pdf-extract has no page-at-a-time API over a shared handle, so the whole
/// document is decoded once on load and the handle keeps one string per page.
pub(crate) struct PdfExtractDocument {
    pages: Vec<String>,
}

impl PdfExtractDocument {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub(crate) fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| {
            ExtractError::Backend {
                backend: Backend::PdfExtract,
                reason: e.to_string(),
            }
        })?;
        log::debug!("pdf-extract decoded {} page(s)", pages.len());
        Ok(Self { pages })
    }
}

impl PdfDocument for PdfExtractDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<Option<String>> {
        Ok(self.pages.get(index).cloned())
    }
}
