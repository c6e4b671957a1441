use im::Vector;

use crate::{
    catalog::{CatalogRequest, FilterSelection, Page, PriceRange},
    client::ClientResult,
    models::{Category, ProductSummary},
};

/// How a fetched product batch is combined with what is already shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Replace,
    Append,
}

/// A product fetch issued by the view. `seq` orders fetches so that a late
/// response to a superseded request can be recognised and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetch {
    pub seq: u64,
    pub request: CatalogRequest,
    pub mode: FetchMode,
}

/// State of the catalog browsing page.
///
/// Every user intent returns the [`Fetch`] to perform; the result is handed
/// back through [`CatalogView::apply`]. Only the most recently issued fetch
/// may change the product list.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    categories: Vec<Category>,
    selection: FilterSelection,
    loaded_page: Option<Page>,
    products: Vector<ProductSummary>,
    total_count: i64,
    latest_seq: u64,
    in_flight: bool,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Last listing page shown, or `None` when the listing has not loaded
    /// (or a filter result is shown instead).
    pub fn current_page(&self) -> Option<Page> {
        self.loaded_page
    }

    pub fn products(&self) -> &Vector<ProductSummary> {
        &self.products
    }

    pub fn total_count(&self) -> i64 {
        self.total_count
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn set_categories(&mut self, result: ClientResult<Vec<Category>>) {
        self.categories = result.unwrap_or_else(|e| {
            tracing::warn!("Failed to load categories: {}", e);
            Vec::new()
        });
    }

    pub fn set_total_count(&mut self, result: ClientResult<i64>) {
        self.total_count = result.unwrap_or_else(|e| {
            tracing::warn!("Failed to load product count: {}", e);
            0
        });
    }

    /// First listing page for a freshly opened view.
    pub fn start(&mut self) -> Fetch {
        self.issue(CatalogRequest::List { page: Page::FIRST }, FetchMode::Replace)
    }

    pub fn toggle_category(&mut self, category_id: i32) -> Fetch {
        self.selection = self.selection.toggle_category(category_id);
        self.refresh()
    }

    pub fn select_price(&mut self, price: Option<PriceRange>) -> Fetch {
        self.selection = self.selection.with_price(price);
        self.refresh()
    }

    pub fn reset_filters(&mut self) -> Fetch {
        self.selection = FilterSelection::default();
        self.refresh()
    }

    /// Load more is only offered for the unfiltered listing, while nothing
    /// else is loading and the total says more pages exist.
    pub fn can_load_more(&self) -> bool {
        !self.selection.is_active()
            && !self.in_flight
            && (self.products.len() as i64) < self.total_count
    }

    pub fn load_more(&mut self) -> Option<Fetch> {
        if !self.can_load_more() {
            return None;
        }

        let page = self.loaded_page.map_or(Page::FIRST, Page::next);
        Some(self.issue(CatalogRequest::List { page }, FetchMode::Append))
    }

    /// Applies the outcome of `fetch`. Returns `false` when the fetch was
    /// superseded and its result dropped.
    pub fn apply(&mut self, fetch: &Fetch, result: ClientResult<Vec<ProductSummary>>) -> bool {
        if fetch.seq != self.latest_seq {
            tracing::debug!(
                seq = fetch.seq,
                latest = self.latest_seq,
                "Discarding stale catalog response"
            );
            return false;
        }

        self.in_flight = false;

        match (fetch.mode, result) {
            (FetchMode::Replace, Ok(products)) => {
                self.products = Vector::from(products);
                self.loaded_page = match fetch.request {
                    CatalogRequest::List { page } => Some(page),
                    CatalogRequest::Filter(_) => None,
                };
            }
            (FetchMode::Replace, Err(e)) => {
                tracing::warn!("Failed to load products: {}", e);
                self.products = Vector::new();
                self.loaded_page = None;
            }
            (FetchMode::Append, Ok(products)) => {
                let mut next = self.products.clone();
                next.append(Vector::from(products));
                self.products = next;
                if let CatalogRequest::List { page } = fetch.request {
                    self.loaded_page = Some(page);
                }
            }
            (FetchMode::Append, Err(e)) => {
                tracing::warn!("Failed to load more products: {}", e);
            }
        }

        true
    }

    fn refresh(&mut self) -> Fetch {
        let request = CatalogRequest::for_selection(&self.selection, Page::FIRST);
        self.issue(request, FetchMode::Replace)
    }

    fn issue(&mut self, request: CatalogRequest, mode: FetchMode) -> Fetch {
        self.latest_seq += 1;
        self.in_flight = true;

        Fetch {
            seq: self.latest_seq,
            request,
            mode,
        }
    }
}
