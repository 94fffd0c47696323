use crate::{Backend, ExtractorConfig, PageRange, PdfDocument, Result};
use std::path::Path;

/// Header written before each page's text. `page_number` is 1-based.
///
/// ```
/// assert_eq!(pdfpagetext::page_header(4), "\n--- Page 4 ---\n");
/// ```
pub fn page_header(page_number: usize) -> String {
    format!("\n--- Page {page_number} ---\n")
}

/// Extract pages 4 through 14 of the PDF at `path` using `backend`.
///
/// Equivalent to [`extract_with`] with a default [`ExtractorConfig`].
pub fn extract<P: AsRef<Path>>(path: P, backend: Backend) -> Result<String> {
    extract_with(path, backend, &ExtractorConfig::default())
}

/// Extract the configured page window of the PDF at `path` using `backend`.
///
/// The document handle lives only for the duration of this call; it is
/// dropped before the text is returned, and also on any error.
///
/// `config.preferred_backend` is not consulted here: the caller has already
/// chosen `backend`.
pub fn extract_with<P: AsRef<Path>>(
    path: P,
    backend: Backend,
    config: &ExtractorConfig,
) -> Result<String> {
    let path = path.as_ref();
    let document = backend.open(path)?;
    log::info!(
        "{}: {} page(s), extracting pages {}..={} with {}",
        path.display(),
        document.page_count(),
        config.page_range.first(),
        config.page_range.last(),
        backend
    );
    extract_from_document(document.as_ref(), config.page_range)
}

/// Concatenate the page window of an already opened document.
///
/// Each page in `range` that the document has contributes [`page_header`]
/// followed by its text. A page with no text contributes only its header.
pub fn extract_from_document(document: &dyn PdfDocument, range: PageRange) -> Result<String> {
    let mut text = String::new();

    for index in range.indices(document.page_count()) {
        let page_number = index + 1;
        text.push_str(&page_header(page_number));

        match document.page_text(index)? {
            Some(page_text) => {
                log::debug!("page {page_number}: {} byte(s) of text", page_text.len());
                text.push_str(&page_text);
            }
            None => log::warn!("page {page_number}: backend returned no text"),
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExtractError;
    use std::cell::Cell;

    /// In-memory document: page `i` reads `"text of page {i + 1}"`, except for
    /// indices listed in `blank` (no text) and `broken` (backend error).
    struct FakeDocument {
        pages: usize,
        blank: Vec<usize>,
        broken: Option<usize>,
        reads: Cell<usize>,
    }

    impl FakeDocument {
        fn new(pages: usize) -> Self {
            Self {
                pages,
                blank: Vec::new(),
                broken: None,
                reads: Cell::new(0),
            }
        }
    }

    impl PdfDocument for FakeDocument {
        fn page_count(&self) -> usize {
            self.pages
        }

        fn page_text(&self, index: usize) -> Result<Option<String>> {
            self.reads.set(self.reads.get() + 1);
            if self.broken == Some(index) {
                return Err(ExtractError::PageExtraction {
                    page: index as u32 + 1,
                    reason: "corrupt content stream".into(),
                });
            }
            if self.blank.contains(&index) {
                return Ok(None);
            }
            Ok(Some(format!("text of page {}", index + 1)))
        }
    }

    fn headers(text: &str) -> Vec<usize> {
        text.split("\n--- Page ")
            .skip(1)
            .map(|rest| rest.split(' ').next().unwrap().parse().unwrap())
            .collect()
    }

    #[test]
    fn twenty_page_document_yields_pages_four_to_fourteen() {
        let doc = FakeDocument::new(20);
        let text = extract_from_document(&doc, PageRange::default()).unwrap();

        assert!(text.starts_with("\n--- Page 4 ---\ntext of page 4"));
        assert!(text.ends_with("text of page 14"));
        assert_eq!(headers(&text), (4..=14).collect::<Vec<_>>());
        assert!(!text.contains("page 15"));
        assert_eq!(doc.reads.get(), 11);
    }

    #[test]
    fn short_document_yields_remaining_pages() {
        for total in 4..14 {
            let text = extract_from_document(&FakeDocument::new(total), PageRange::default())
                .unwrap();
            assert_eq!(headers(&text), (4..=total).collect::<Vec<_>>(), "total={total}");
        }
    }

    #[test]
    fn document_shorter_than_window_is_empty() {
        for total in 0..4 {
            let doc = FakeDocument::new(total);
            assert_eq!(extract_from_document(&doc, PageRange::default()).unwrap(), "");
            assert_eq!(doc.reads.get(), 0);
        }
    }

    #[test]
    fn exact_output_for_small_window() {
        let doc = FakeDocument::new(3);
        let text = extract_from_document(&doc, PageRange::new(2, 3).unwrap()).unwrap();
        assert_eq!(
            text,
            "\n--- Page 2 ---\ntext of page 2\n--- Page 3 ---\ntext of page 3"
        );
    }

    #[test]
    fn blank_page_keeps_its_header() {
        let mut doc = FakeDocument::new(6);
        doc.blank = vec![4];
        let text = extract_from_document(&doc, PageRange::default()).unwrap();
        assert_eq!(
            text,
            "\n--- Page 4 ---\ntext of page 4\n--- Page 5 ---\n\n--- Page 6 ---\ntext of page 6"
        );
    }

    #[test]
    fn page_failure_propagates_and_stops() {
        let mut doc = FakeDocument::new(20);
        doc.broken = Some(5);
        let err = extract_from_document(&doc, PageRange::default()).unwrap_err();
        assert!(matches!(err, ExtractError::PageExtraction { page: 6, .. }));
        assert_eq!(doc.reads.get(), 3);
    }

    #[test]
    fn repeated_extraction_is_identical() {
        let doc = FakeDocument::new(17);
        let first = extract_from_document(&doc, PageRange::default()).unwrap();
        let second = extract_from_document(&doc, PageRange::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn page_header_format() {
        assert_eq!(page_header(14), "\n--- Page 14 ---\n");
    }
}
