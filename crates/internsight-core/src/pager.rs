//! The result-set pagination state machine.
//!
//! A [`ResultPager`] owns the full ordered result set from the most recent
//! successful submission plus the zero-based current page. It is the single
//! authority for how a submission outcome mutates displayed state:
//!
//! - a successful submission replaces the whole set atomically and resets
//!   the page to 0, regardless of prior state;
//! - a failed submission changes nothing — prior records and page index
//!   survive so the caller can keep showing them;
//! - `next`/`previous` clamp at the last/first page and are no-ops on an
//!   empty set.
//!
//! The pager never merges result sets across submissions and never re-orders
//! records; ranking belongs to the service.

use crate::records::Recommendation;

/// Number of recommendation cards shown per page.
pub const PAGE_SIZE: usize = 3;

/// Paginated view state over the most recent successful result set.
#[derive(Debug, Clone, Default)]
pub struct ResultPager {
    records: Vec<Recommendation>,
    page: usize,
}

impl ResultPager {
    /// Creates an empty pager: no records, page 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire result set and resets the page to 0.
    ///
    /// This is the only way records enter the pager, so a partial merge with
    /// a prior result set cannot happen.
    pub fn replace(&mut self, records: Vec<Recommendation>) {
        self.records = records;
        self.page = 0;
    }

    /// Routes a submission outcome into the pager.
    ///
    /// `Ok` replaces the result set in full (see [`Self::replace`]). `Err`
    /// leaves both the records and the current page untouched and hands the
    /// error back to the caller, which may render it however it likes.
    ///
    /// # Errors
    ///
    /// Returns the submission error unchanged when `outcome` is `Err`.
    pub fn apply<E>(&mut self, outcome: Result<Vec<Recommendation>, E>) -> Result<(), E> {
        let records = outcome?;
        self.replace(records);
        Ok(())
    }

    /// Advances to the next page if one exists; otherwise a no-op.
    ///
    /// Returns `true` if the page changed.
    pub fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Moves back one page, clamped at page 0.
    ///
    /// Returns `true` if the page changed.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// The slice of records visible on the current page.
    ///
    /// May be shorter than [`PAGE_SIZE`] on the last page; empty when the
    /// result set is empty.
    #[must_use]
    pub fn visible(&self) -> &[Recommendation] {
        let start = self.page * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.records.len());
        &self.records[start..end]
    }

    /// The full result set, in service ranking order.
    #[must_use]
    pub fn records(&self) -> &[Recommendation] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Zero-based current page. Always 0 when the set is empty.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Total number of pages: `ceil(len / PAGE_SIZE)`, 0 when empty.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.records.len().div_ceil(PAGE_SIZE)
    }

    /// Whether a further page exists after the current one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        (self.page + 1) * PAGE_SIZE < self.records.len()
    }

    /// Whether a page exists before the current one.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }
}

#[cfg(test)]
#[path = "pager_test.rs"]
mod tests;
