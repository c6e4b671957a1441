use std::fmt;

use crate::error::{AppError, Result};

/// Products per unfiltered listing page.
pub const DEFAULT_PAGE_SIZE: i64 = 30;

/// A 1-based listing page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Page(u32);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(number: u32) -> Option<Self> {
        (number >= 1).then_some(Self(number))
    }

    /// Parses a raw path segment. Zero, negative and non-numeric input are
    /// all rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let number: i64 = raw
            .trim()
            .parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid page number: {}", raw)))?;

        u32::try_from(number)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| AppError::BadRequest("Page number must be 1 or greater".to_string()))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Number of records to skip before this page. Fails when the offset
    /// does not fit in an `i64`.
    pub fn offset(self, page_size: i64) -> Result<i64> {
        (i64::from(self.0) - 1)
            .checked_mul(page_size)
            .ok_or_else(|| AppError::BadRequest(format!("Page number out of range: {}", self.0)))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
