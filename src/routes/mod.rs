mod categories;
mod health;
mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .nest("/api/v1/product", product_routes())
        .nest("/api/v1/category", category_routes())
}

fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/product-count", get(products::product_count))
        .route("/product-list", get(products::product_list_first))
        .route("/product-list/{page}", get(products::product_list))
        .route("/product-filters", post(products::product_filters))
        .route("/get-product", get(products::get_products))
        .route("/get-product/{slug}", get(products::get_single_product))
        .route("/product-photo/{pid}", get(products::product_photo))
        .route("/search/{keyword}", get(products::search_products))
        .route("/related-product/{pid}/{cid}", get(products::related_products))
        .route("/product-category/{slug}", get(products::products_by_category))
}

fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/get-category", get(categories::get_all_categories))
        .route("/single-category/{slug}", get(categories::get_single_category))
}
