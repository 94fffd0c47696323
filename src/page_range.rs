use crate::{ExtractError, Result};
use std::ops::Range;

// ── PageRange ─────────────────────────────────────────────────────────────────

/// A window of pages, 1-based and inclusive on both ends.
///
/// The default window is pages 4 through 14.
///
/// ```
/// use pdfpagetext::PageRange;
///
/// let range = PageRange::default();
/// assert_eq!(range.indices(20), 3..14);
/// assert_eq!(range.indices(9), 3..9);
/// assert!(range.indices(2).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    first: u32,
    last: u32,
}

impl PageRange {
    pub const DEFAULT_FIRST: u32 = 4;
    pub const DEFAULT_LAST: u32 = 14;

    /// Build a window from 1-based inclusive bounds.
    ///
    /// Returns [`ExtractError::InvalidPageRange`] when `first` is zero or
    /// greater than `last`.
    pub fn new(first: u32, last: u32) -> Result<Self> {
        if first == 0 || first > last {
            return Err(ExtractError::InvalidPageRange { first, last });
        }
        Ok(Self { first, last })
    }

    /// First page of the window (1-based).
    pub fn first(&self) -> u32 {
        self.first
    }

    /// Last page of the window (1-based, inclusive).
    pub fn last(&self) -> u32 {
        self.last
    }

    /// Zero-based, half-open page indices to read from a document that has
    /// `total_pages` pages: `first-1 .. min(last, total_pages)`.
    ///
    /// The result is empty when the document ends before the window starts.
    pub fn indices(&self, total_pages: usize) -> Range<usize> {
        let start = (self.first - 1) as usize;
        let end = (self.last as usize).min(total_pages);
        if start >= end {
            return start..start;
        }
        start..end
    }
}

impl Default for PageRange {
    fn default() -> Self {
        Self {
            first: Self::DEFAULT_FIRST,
            last: Self::DEFAULT_LAST,
        }
    }
}
