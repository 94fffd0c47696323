//! # pdfpagetext
//!
//! Extract the text of a window of pages from a PDF document.
//!
//! ## What this crate does
//!
//! 1. **Discover backends** — reports which text-extraction providers were
//!    compiled in (`pdf-extract`, `lopdf`) and picks one by fixed priority.
//! 2. **Open the document** — the chosen backend loads the file into a
//!    scoped [`PdfDocument`] handle that is dropped when extraction ends.
//! 3. **Walk the page window** — pages 4 through 14 by default, clamped to the
//!    document's page count.
//! 4. **Concatenate** — each page contributes a `\n--- Page N ---\n` header
//!    followed by its text.
//!
//! ## Quick example
//!
//! ```no_run
//! use pdfpagetext::{discover, extract, DEFAULT_PDF_PATH};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = discover().select(None)?;
//! let text = extract(DEFAULT_PDF_PATH, backend)?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

mod backend;
mod document;
mod extractor;
#[cfg(feature = "lopdf-backend")]
mod lopdf_backend;
mod page_range;
#[cfg(feature = "pdf-extract-backend")]
mod pdf_extract_backend;

pub use backend::{discover, AvailableBackends, Backend};
pub use document::PdfDocument;
pub use extractor::{extract, extract_from_document, extract_with, page_header};
pub use page_range::PageRange;

/// File extracted when the binary is run without a path argument.
pub const DEFAULT_PDF_PATH: &str = "Prism of Magic_ Homebrew System for D&D 5e - 11-17.pdf";

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for [`extract_with`].
#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    /// Pages to extract, 1-based and inclusive. Defaults to 4 through 14.
    pub page_range: PageRange,

    /// Backend to use instead of the first available one in priority order.
    /// Only consulted by callers that select a backend from this config,
    /// such as the command-line driver.
    pub preferred_backend: Option<Backend>,
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No text-extraction backend was compiled into this build.
    #[error("no PDF text-extraction backend is available")]
    NoBackendAvailable,

    /// A specific backend was requested but is not compiled into this build.
    #[error("backend '{0}' is not available in this build")]
    BackendUnavailable(Backend),

    /// A backend name could not be parsed.
    #[error("unknown backend '{0}' (expected 'pdf-extract' or 'lopdf')")]
    UnknownBackend(String),

    /// A filesystem I/O error occurred while reading the document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// lopdf could not open or parse the document.
    #[error("PDF parse error: {0}")]
    Parse(#[from] lopdf::Error),

    /// A backend failed to open or decode the document as a whole.
    #[error("{backend} backend failed: {reason}")]
    Backend { backend: Backend, reason: String },

    /// A backend failed while extracting text from a single page.
    #[error("failed to extract text from page {page}: {reason}")]
    PageExtraction { page: u32, reason: String },

    /// The requested page window is empty or starts before page 1.
    #[error("invalid page range {first}..={last}: pages are 1-based and first must not exceed last")]
    InvalidPageRange { first: u32, last: u32 },
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ExtractError>;
