use crate::{ExtractError, PdfDocument, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// ── Backend ───────────────────────────────────────────────────────────────────

/// A text-extraction provider.
///
/// Every variant exists in every build so that it can be named on the command
/// line and in errors, but only the ones whose cargo feature is enabled can
/// open documents. See [`Backend::is_available`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// The `pdf-extract` crate (feature `pdf-extract-backend`).
    PdfExtract,
    /// The `lopdf` crate (feature `lopdf-backend`).
    Lopdf,
}

impl Backend {
    /// Selection order when no backend is requested explicitly.
    pub const PRIORITY: [Backend; 2] = [Backend::PdfExtract, Backend::Lopdf];

    /// Guidance printed when no backend is compiled in.
    pub const INSTALL_GUIDANCE: [&'static str; 2] = [
        "ERROR: No PDF backend available. Rebuild with pdf-extract or lopdf enabled:",
        "  cargo install pdfpagetext --features pdf-extract-backend  (or --features lopdf-backend)",
    ];

    /// Stable name used on the command line and in log output.
    pub fn name(self) -> &'static str {
        match self {
            Backend::PdfExtract => "pdf-extract",
            Backend::Lopdf => "lopdf",
        }
    }

    /// `true` when this backend was compiled into the current build.
    pub fn is_available(self) -> bool {
        match self {
            Backend::PdfExtract => cfg!(feature = "pdf-extract-backend"),
            Backend::Lopdf => cfg!(feature = "lopdf-backend"),
        }
    }

    /// Open the document at `path` with this backend.
    ///
    /// The returned handle owns everything the backend loaded; dropping it
    /// releases the document.
    pub fn open(self, path: &Path) -> Result<Box<dyn PdfDocument>> {
        log::debug!("opening {} with {}", path.display(), self);
        match self {
            Backend::PdfExtract => open_pdf_extract(path),
            Backend::Lopdf => open_lopdf(path),
        }
    }
}

#[cfg(feature = "pdf-extract-backend")]
fn open_pdf_extract(path: &Path) -> Result<Box<dyn PdfDocument>> {
    Ok(Box::new(crate::pdf_extract_backend::PdfExtractDocument::load(path)?))
}

#[cfg(not(feature = "pdf-extract-backend"))]
fn open_pdf_extract(_path: &Path) -> Result<Box<dyn PdfDocument>> {
    Err(ExtractError::BackendUnavailable(Backend::PdfExtract))
}

#[cfg(feature = "lopdf-backend")]
fn open_lopdf(path: &Path) -> Result<Box<dyn PdfDocument>> {
    Ok(Box::new(crate::lopdf_backend::LopdfDocument::load(path)?))
}

#[cfg(not(feature = "lopdf-backend"))]
fn open_lopdf(_path: &Path) -> Result<Box<dyn PdfDocument>> {
    Err(ExtractError::BackendUnavailable(Backend::Lopdf))
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf-extract" | "pdf_extract" | "pdfextract" => Ok(Backend::PdfExtract),
            "lopdf" => Ok(Backend::Lopdf),
            other => Err(ExtractError::UnknownBackend(other.to_string())),
        }
    }
}

// ── Discovery ─────────────────────────────────────────────────────────────────

/// The set of backends present in this build, in priority order.
///
/// Computed once by [`discover`] and handed to whoever needs to choose a
/// backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableBackends {
    backends: Vec<Backend>,
}

/// Probe which backends were compiled in.
pub fn discover() -> AvailableBackends {
    AvailableBackends::new(
        Backend::PRIORITY
            .into_iter()
            .filter(|b| b.is_available()),
    )
}

impl AvailableBackends {
    /// Build a set from an arbitrary list; the result is deduplicated and
    /// ordered by [`Backend::PRIORITY`].
    pub fn new<I: IntoIterator<Item = Backend>>(backends: I) -> Self {
        let listed: Vec<Backend> = backends.into_iter().collect();
        Self {
            backends: Backend::PRIORITY
                .into_iter()
                .filter(|b| listed.contains(b))
                .collect(),
        }
    }

    /// Backends in priority order.
    pub fn backends(&self) -> &[Backend] {
        &self.backends
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    pub fn contains(&self, backend: Backend) -> bool {
        self.backends.contains(&backend)
    }

    /// Choose the backend to extract with.
    ///
    /// With no preference this is the first available backend in priority
    /// order. A preferred backend is used only if it is available. An empty
    /// set is always [`ExtractError::NoBackendAvailable`], whatever the
    /// preference.
    pub fn select(&self, preferred: Option<Backend>) -> Result<Backend> {
        let first = *self
            .backends
            .first()
            .ok_or(ExtractError::NoBackendAvailable)?;

        match preferred {
            Some(backend) if self.contains(backend) => Ok(backend),
            Some(backend) => Err(ExtractError::BackendUnavailable(backend)),
            None => Ok(first),
        }
    }
}
