use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    catalog::ProductFilter,
    database::connection,
    error::Result,
    models::{Category, NewCategory, NewProduct, ProductDetail, ProductPhoto, ProductSummary},
    queries::{category_queries, product_queries},
};

/// Read access to the product catalog, plus the inserts used to seed it.
///
/// Handlers only talk to this trait, so the HTTP layer can be exercised
/// against any backing store.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn ping(&self) -> Result<()>;

    async fn count_products(&self) -> Result<i64>;

    /// Newest products first, skipping `offset` rows.
    async fn list_products(&self, offset: i64, limit: i64) -> Result<Vec<ProductSummary>>;

    /// Every product matching the filter, unpaginated.
    async fn filter_products(&self, filter: &ProductFilter) -> Result<Vec<ProductSummary>>;

    async fn product_by_slug(&self, slug: &str) -> Result<Option<ProductDetail>>;

    /// `None` when the product does not exist; the photo fields may still be
    /// empty for an existing product.
    async fn product_photo(&self, product_id: i32) -> Result<Option<ProductPhoto>>;

    async fn search_products(&self, keyword: &str) -> Result<Vec<ProductSummary>>;

    async fn related_products(
        &self,
        product_id: i32,
        category_id: i32,
        limit: i64,
    ) -> Result<Vec<ProductSummary>>;

    async fn products_in_category(&self, category_id: i32) -> Result<Vec<ProductSummary>>;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>>;

    async fn insert_category(&self, new: &NewCategory) -> Result<Category>;

    async fn insert_product(&self, new: &NewProduct) -> Result<ProductSummary>;
}

#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn ping(&self) -> Result<()> {
        connection::check_health(&self.pool).await
    }

    async fn count_products(&self) -> Result<i64> {
        product_queries::count(&self.pool).await
    }

    async fn list_products(&self, offset: i64, limit: i64) -> Result<Vec<ProductSummary>> {
        product_queries::list_page(&self.pool, offset, limit).await
    }

    async fn filter_products(&self, filter: &ProductFilter) -> Result<Vec<ProductSummary>> {
        product_queries::filter(&self.pool, filter).await
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Option<ProductDetail>> {
        let Some(product) = product_queries::find_by_slug(&self.pool, slug).await? else {
            return Ok(None);
        };

        let category = category_queries::find_by_id(&self.pool, product.category_id).await?;

        Ok(Some(ProductDetail { product, category }))
    }

    async fn product_photo(&self, product_id: i32) -> Result<Option<ProductPhoto>> {
        product_queries::find_photo(&self.pool, product_id).await
    }

    async fn search_products(&self, keyword: &str) -> Result<Vec<ProductSummary>> {
        product_queries::search(&self.pool, keyword).await
    }

    async fn related_products(
        &self,
        product_id: i32,
        category_id: i32,
        limit: i64,
    ) -> Result<Vec<ProductSummary>> {
        product_queries::related(&self.pool, product_id, category_id, limit).await
    }

    async fn products_in_category(&self, category_id: i32) -> Result<Vec<ProductSummary>> {
        product_queries::in_category(&self.pool, category_id).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        category_queries::get_all(&self.pool).await
    }

    async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        category_queries::find_by_slug(&self.pool, slug).await
    }

    async fn insert_category(&self, new: &NewCategory) -> Result<Category> {
        category_queries::create_category(&self.pool, new).await
    }

    async fn insert_product(&self, new: &NewProduct) -> Result<ProductSummary> {
        product_queries::create_product(&self.pool, new).await
    }
}
