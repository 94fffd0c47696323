use crate::{ExtractError, PdfDocument, Result};
use lopdf::{Document, ObjectId};
use std::path::Path;

// ── LopdfDocument ─────────────────────────────────────────────────────────────

/// A document parsed by lopdf.
///
/// lopdf reads the whole file into memory on load, so the file itself is
/// closed before [`LopdfDocument::load`] returns; the handle owns the parsed
/// object graph.
pub(crate) struct LopdfDocument {
    document: Document,
    /// `(page number, page object)` pairs in page order. lopdf numbers pages
    /// from 1.
    pages: Vec<(u32, ObjectId)>,
}

impl LopdfDocument {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let document = Document::load(path)?;
        Ok(Self::from_document(document))
    }

    pub(crate) fn from_document(document: Document) -> Self {
        let pages = document.get_pages().into_iter().collect();
        Self { document, pages }
    }
}

impl PdfDocument for LopdfDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<Option<String>> {
        let Some(&(page_number, page_id)) = self.pages.get(index) else {
            return Ok(None);
        };

        // No content stream means nothing to extract, not an error.
        if self.document.get_page_contents(page_id).is_empty() {
            return Ok(None);
        }

        self.document
            .extract_text(&[page_number])
            .map(Some)
            .map_err(|e| ExtractError::PageExtraction {
                page: page_number,
                reason: e.to_string(),
            })
    }
}
