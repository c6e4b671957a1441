use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{
    catalog::{CatalogRequest, Page, ProductFilter},
    client::{ClientError, ClientResult},
    models::{
        Category, CategoryListResponse, ProductCountResponse, ProductListResponse, ProductSummary,
    },
};

/// The four catalog endpoints the browsing view depends on.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn categories(&self) -> ClientResult<Vec<Category>>;

    async fn product_count(&self) -> ClientResult<i64>;

    async fn product_page(&self, page: Page) -> ClientResult<Vec<ProductSummary>>;

    async fn filter_products(&self, filter: &ProductFilter) -> ClientResult<Vec<ProductSummary>>;

    async fn fetch(&self, request: &CatalogRequest) -> ClientResult<Vec<ProductSummary>> {
        match request {
            CatalogRequest::List { page } => self.product_page(*page).await,
            CatalogRequest::Filter(filter) => self.filter_products(filter).await,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = body
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown catalog error")
                .to_string();
            return Err(ClientError::Status { status, message });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn categories(&self) -> ClientResult<Vec<Category>> {
        let response = self.http.get(self.url("/category/get-category")).send().await?;
        let body: CategoryListResponse = Self::decode(response).await?;
        Ok(body.category)
    }

    async fn product_count(&self) -> ClientResult<i64> {
        let response = self.http.get(self.url("/product/product-count")).send().await?;
        let body: ProductCountResponse = Self::decode(response).await?;
        Ok(body.total)
    }

    async fn product_page(&self, page: Page) -> ClientResult<Vec<ProductSummary>> {
        let response = self
            .http
            .get(self.url(&format!("/product/product-list/{}", page)))
            .send()
            .await?;
        let body: ProductListResponse = Self::decode(response).await?;
        Ok(body.products)
    }

    async fn filter_products(&self, filter: &ProductFilter) -> ClientResult<Vec<ProductSummary>> {
        let response = self
            .http
            .post(self.url("/product/product-filters"))
            .json(&filter.to_request())
            .send()
            .await?;
        let body: ProductListResponse = Self::decode(response).await?;
        Ok(body.products)
    }
}
