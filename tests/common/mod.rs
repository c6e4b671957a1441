#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use storefront_catalog::{
    AppError, AppState, Result,
    catalog::ProductFilter,
    database::CatalogStore,
    models::{Category, NewCategory, NewProduct, ProductDetail, ProductPhoto, ProductSummary},
    routes,
};
use tower::ServiceExt;

struct StoredProduct {
    summary: ProductSummary,
    photo: ProductPhoto,
}

#[derive(Default)]
struct Inner {
    categories: Vec<Category>,
    products: Vec<StoredProduct>,
}

/// In-memory catalog that records every store call, so tests can check that
/// rejected requests never reach storage.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    calls: Mutex<Vec<String>>,
    filters: Mutex<Vec<ProductFilter>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn filters(&self) -> Vec<ProductFilter> {
        self.filters.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
        self.filters.lock().unwrap().clear();
    }

    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn set_photo(&self, product_id: i32, data: &[u8], content_type: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(stored) = inner
            .products
            .iter_mut()
            .find(|p| p.summary.id == product_id)
        {
            stored.photo = ProductPhoto {
                photo_data: Some(data.to_vec()),
                photo_content_type: Some(content_type.to_string()),
            };
        }
    }

    fn record(&self, call: &str) -> Result<()> {
        self.calls.lock().unwrap().push(call.to_string());
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn newest_first(&self) -> Vec<ProductSummary> {
        let inner = self.inner.lock().unwrap();
        let mut products: Vec<ProductSummary> =
            inner.products.iter().map(|p| p.summary.clone()).collect();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        products
    }
}

// Later ids are strictly newer.
fn created_at(id: i32) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000 + i64::from(id), 0).unwrap_or_default()
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn ping(&self) -> Result<()> {
        self.record("ping")
    }

    async fn count_products(&self) -> Result<i64> {
        self.record("count_products")?;
        Ok(self.inner.lock().unwrap().products.len() as i64)
    }

    async fn list_products(&self, offset: i64, limit: i64) -> Result<Vec<ProductSummary>> {
        self.record("list_products")?;
        Ok(self
            .newest_first()
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn filter_products(&self, filter: &ProductFilter) -> Result<Vec<ProductSummary>> {
        self.record("filter_products")?;
        self.filters.lock().unwrap().push(filter.clone());
        Ok(self
            .newest_first()
            .into_iter()
            .filter(|p| filter.matches(p.category_id, p.price))
            .collect())
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Option<ProductDetail>> {
        self.record("product_by_slug")?;
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .products
            .iter()
            .find(|p| p.summary.slug == slug)
            .map(|p| ProductDetail {
                category: inner
                    .categories
                    .iter()
                    .find(|c| c.id == p.summary.category_id)
                    .cloned(),
                product: p.summary.clone(),
            }))
    }

    async fn product_photo(&self, product_id: i32) -> Result<Option<ProductPhoto>> {
        self.record("product_photo")?;
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .products
            .iter()
            .find(|p| p.summary.id == product_id)
            .map(|p| p.photo.clone()))
    }

    async fn search_products(&self, keyword: &str) -> Result<Vec<ProductSummary>> {
        self.record("search_products")?;
        let needle = keyword.to_lowercase();
        Ok(self
            .newest_first()
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect())
    }

    async fn related_products(
        &self,
        product_id: i32,
        category_id: i32,
        limit: i64,
    ) -> Result<Vec<ProductSummary>> {
        self.record("related_products")?;
        Ok(self
            .newest_first()
            .into_iter()
            .filter(|p| p.category_id == category_id && p.id != product_id)
            .take(limit as usize)
            .collect())
    }

    async fn products_in_category(&self, category_id: i32) -> Result<Vec<ProductSummary>> {
        self.record("products_in_category")?;
        Ok(self
            .newest_first()
            .into_iter()
            .filter(|p| p.category_id == category_id)
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.record("list_categories")?;
        let mut categories = self.inner.lock().unwrap().categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        self.record("category_by_slug")?;
        let inner = self.inner.lock().unwrap();
        Ok(inner.categories.iter().find(|c| c.slug == slug).cloned())
    }

    async fn insert_category(&self, new: &NewCategory) -> Result<Category> {
        let mut inner = self.inner.lock().unwrap();
        let category = Category {
            id: inner.categories.len() as i32 + 1,
            name: new.name.clone(),
            slug: new.slug.clone(),
        };
        inner.categories.push(category.clone());
        Ok(category)
    }

    async fn insert_product(&self, new: &NewProduct) -> Result<ProductSummary> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.products.len() as i32 + 1;
        let summary = ProductSummary {
            id,
            name: new.name.clone(),
            slug: new.slug.clone(),
            description: new.description.clone(),
            price: new.price,
            category_id: new.category_id,
            quantity: new.quantity,
            shipping: new.shipping,
            created_at: created_at(id),
            updated_at: created_at(id),
        };
        inner.products.push(StoredProduct {
            summary: summary.clone(),
            photo: ProductPhoto {
                photo_data: None,
                photo_content_type: None,
            },
        });
        Ok(summary)
    }
}

/// Three categories (Electronics = 1, Clothing = 2, Books = 3) and
/// `product_count` products. Product `n` belongs to category `(n - 1) % 3 + 1`
/// and costs `5 * n`.
pub async fn seeded_store(product_count: i32) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::default());

    for name in ["Electronics", "Clothing", "Books"] {
        store.insert_category(&NewCategory::new(name)).await.unwrap();
    }

    for n in 1..=product_count {
        let product = NewProduct::new(
            format!("Product {}", n),
            format!("Description of item {}", n),
            Decimal::from(5 * n),
            (n - 1) % 3 + 1,
            n,
        )
        .with_shipping(n % 2 == 0);
        store.insert_product(&product).await.unwrap();
    }

    store.clear_calls();
    store
}

pub fn router(store: Arc<MemoryStore>, page_size: i64) -> Router {
    routes::create_router().with_state(AppState::new(store, page_size))
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>, Option<String>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec(), content_type)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body, _) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

pub async fn post_json(app: &Router, uri: &str, payload: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, body, _) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

pub fn product_ids(body: &Value) -> Vec<i64> {
    body["products"]
        .as_array()
        .map(|products| products.iter().filter_map(|p| p["id"].as_i64()).collect())
        .unwrap_or_default()
}
