use log::info;

use crate::client::RecipeSearchClient;
use crate::error::SearchError;
use crate::filter::apply_filters;
use crate::model::{FilterCriteria, RecipeRecord, ResultSet, SearchQuery, ShoppingListEntry};
use crate::shopping::ShoppingList;

/// Display page size recommended for a 3-per-row card grid
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Per-session state: the current result set, its page index and the
/// shopping list. One context per user session, no cross-session sharing.
///
/// Every mutation happens inside exactly one of the `on_*` handlers, each a
/// complete state transition run before the next user action is handled.
/// The rendering surface invokes a handler and re-reads state; it never
/// mutates the context directly.
#[derive(Debug)]
pub struct SessionContext {
    result_set: ResultSet,
    shopping_list: ShoppingList,
    page_size: usize,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        SessionContext {
            result_set: ResultSet::default(),
            shopping_list: ShoppingList::new(),
            page_size: page_size.max(1),
        }
    }

    /// Handle a search submission: validate, fetch, filter, replace the
    /// result set and reset the page index.
    ///
    /// A blank keyword is rejected before any network call and leaves all
    /// session state untouched. Zero filtered results is not an error; the
    /// result set is simply replaced with an empty one.
    pub fn on_search_submit(
        &mut self,
        client: &RecipeSearchClient,
        query: &SearchQuery,
        criteria: &FilterCriteria,
    ) -> Result<&ResultSet, SearchError> {
        if query.keyword.trim().is_empty() {
            return Err(SearchError::EmptyKeyword);
        }

        let fetched = client.fetch_recipes(query);
        let filtered = apply_filters(&fetched, criteria);
        info!(
            "search '{}' fetched {} records, {} after filtering",
            query.keyword,
            fetched.len(),
            filtered.len()
        );

        self.result_set = ResultSet::new(filtered);
        Ok(&self.result_set)
    }

    /// Move the page index by `delta`, clamped into `[0, total_pages - 1]`.
    pub fn on_page_change(&mut self, delta: isize) {
        let last_page = self.total_pages().saturating_sub(1) as isize;
        let target = self.result_set.current_page as isize + delta;
        self.result_set.current_page = target.clamp(0, last_page) as usize;
    }

    pub fn on_add_to_list(&mut self, entry: ShoppingListEntry) {
        self.shopping_list.append(entry);
    }

    pub fn on_clear_list(&mut self) {
        self.shopping_list.clear();
    }

    /// Change the display page size, re-clamping the page index so it still
    /// points at a valid page of the current result set.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        let last_page = self.total_pages().saturating_sub(1);
        if self.result_set.current_page > last_page {
            self.result_set.current_page = last_page;
        }
    }

    /// The slice of the result set shown on the current page
    pub fn current_page_records(&self) -> &[RecipeRecord] {
        let start = self.result_set.current_page * self.page_size;
        let end = (start + self.page_size).min(self.result_set.len());
        if start >= end {
            return &[];
        }
        &self.result_set.records[start..end]
    }

    pub fn total_pages(&self) -> usize {
        self.result_set.len().div_ceil(self.page_size)
    }

    pub fn result_set(&self) -> &ResultSet {
        &self.result_set
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.shopping_list
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}
