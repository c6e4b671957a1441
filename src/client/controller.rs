use crate::{
    catalog::{PriceBucket, PriceRange},
    client::{CatalogApi, CatalogView, Fetch},
};

/// Drives a [`CatalogView`] against a [`CatalogApi`]. Failed requests are
/// absorbed by the view; nothing here returns an error.
pub struct CatalogController<A> {
    api: A,
    view: CatalogView,
}

impl<A: CatalogApi> CatalogController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            view: CatalogView::new(),
        }
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub async fn initial_load(&mut self) {
        let (categories, total) = tokio::join!(self.api.categories(), self.api.product_count());
        self.view.set_categories(categories);
        self.view.set_total_count(total);

        let fetch = self.view.start();
        self.run(fetch).await;
    }

    pub async fn toggle_category(&mut self, category_id: i32) {
        let fetch = self.view.toggle_category(category_id);
        self.run(fetch).await;
    }

    pub async fn select_price(&mut self, price: Option<PriceRange>) {
        let fetch = self.view.select_price(price);
        self.run(fetch).await;
    }

    /// Selects one of the fixed price buckets by id. Unknown ids are ignored.
    pub async fn select_price_bucket(&mut self, bucket_id: u8) {
        match PriceBucket::find(bucket_id) {
            Some(bucket) => self.select_price(Some(bucket.range())).await,
            None => tracing::warn!("Unknown price bucket: {}", bucket_id),
        }
    }

    pub async fn reset_filters(&mut self) {
        let fetch = self.view.reset_filters();
        self.run(fetch).await;
    }

    /// Returns `false` when load more is not currently available.
    pub async fn load_more(&mut self) -> bool {
        match self.view.load_more() {
            Some(fetch) => {
                self.run(fetch).await;
                true
            }
            None => false,
        }
    }

    async fn run(&mut self, fetch: Fetch) {
        let result = self.api.fetch(&fetch.request).await;
        self.view.apply(&fetch, result);
    }
}
