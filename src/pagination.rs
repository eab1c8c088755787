//! Cursor pagination for lakeFS list responses.

use serde::{Deserialize, Serialize};

use crate::error::{LakeError, Result};

/// Page size the server applies when `amount` is omitted.
pub const DEFAULT_AMOUNT: u32 = 100;

/// Largest `amount` the API accepts.
pub const MAX_AMOUNT: u32 = 1000;

/// Pagination block returned with every list response.
///
/// `next_offset` is an opaque cursor. Pass it back verbatim as `after`
/// to fetch the following page; never inspect its contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Whether more results exist after this page.
    pub has_more: bool,
    /// Cursor for the next page (empty on the last page).
    #[serde(default)]
    pub next_offset: String,
    /// Number of results on this page.
    #[serde(default)]
    pub results: u32,
    /// Largest page size the server will return.
    #[serde(default)]
    pub max_per_page: u32,
}

/// A page of results from the lakeFS API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Pagination metadata for this page.
    pub pagination: Pagination,
    /// The items on this page.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Create a page from items and pagination info.
    #[must_use]
    pub fn new(results: Vec<T>, pagination: Pagination) -> Self {
        Self {
            pagination,
            results,
        }
    }

    /// Whether another page can be requested.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.pagination.has_more
    }

    /// The cursor to pass as `after` for the next page, if there is one.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        if self.pagination.has_more && !self.pagination.next_offset.is_empty() {
            Some(&self.pagination.next_offset)
        } else {
            None
        }
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            pagination: self.pagination,
            results: self.results.into_iter().map(f).collect(),
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.results.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Query parameters for paginated requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Return items after this cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Maximum number of items to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,
}

impl PaginationParams {
    /// Pagination params starting after `after` with page size `amount`.
    ///
    /// An empty cursor means "from the beginning" and is not sent.
    #[must_use]
    pub fn new(after: Option<&str>, amount: Option<u32>) -> Self {
        Self {
            after: after.filter(|a| !a.is_empty()).map(str::to_string),
            amount,
        }
    }

    /// Reject page sizes the server would refuse.
    pub fn validate(&self) -> Result<()> {
        match self.amount {
            Some(amount) if amount > MAX_AMOUNT => Err(LakeError::invalid(
                "amount",
                format!("must be at most {MAX_AMOUNT}, got {amount}"),
            )),
            _ => Ok(()),
        }
    }
}
