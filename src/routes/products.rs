use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    catalog::{Page, ProductFilter},
    error::{AppError, Result},
    models::{
        CategoryProductsResponse, FeaturedProductsResponse, FilterRequest, ProductCountResponse,
        ProductListResponse, ProductSummary, SingleProductResponse,
    },
};

const FEATURED_LIMIT: i64 = 12;
const RELATED_LIMIT: i64 = 3;

fn parse_id(raw: &str, field: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {}: {}", field, raw)))
}

fn require_text<'a>(raw: &'a str, field: &str) -> Result<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(trimmed)
}

pub async fn product_count(State(state): State<AppState>) -> Result<Json<ProductCountResponse>> {
    let total = state.store.count_products().await?;

    Ok(Json(ProductCountResponse {
        success: true,
        total,
    }))
}

pub async fn product_list(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<Json<ProductListResponse>> {
    let page = Page::parse(&page)?;
    list_page(&state, page).await
}

pub async fn product_list_first(State(state): State<AppState>) -> Result<Json<ProductListResponse>> {
    list_page(&state, Page::FIRST).await
}

async fn list_page(state: &AppState, page: Page) -> Result<Json<ProductListResponse>> {
    let offset = page.offset(state.page_size)?;
    let products = state.store.list_products(offset, state.page_size).await?;

    Ok(Json(ProductListResponse::ok(products)))
}

pub async fn product_filters(
    State(state): State<AppState>,
    payload: std::result::Result<Json<FilterRequest>, JsonRejection>,
) -> Result<Json<ProductListResponse>> {
    let Json(payload) = payload
        .map_err(|e| AppError::BadRequest(format!("Invalid filter request: {}", e.body_text())))?;

    let filter = ProductFilter::from_request(&payload)?;
    tracing::debug!(
        categories = filter.categories().len(),
        priced = filter.price().is_some(),
        "Filtering products"
    );

    let products = state.store.filter_products(&filter).await?;

    Ok(Json(ProductListResponse::ok(products)))
}

pub async fn get_products(State(state): State<AppState>) -> Result<Json<FeaturedProductsResponse>> {
    let products = state.store.list_products(0, FEATURED_LIMIT).await?;

    Ok(Json(FeaturedProductsResponse {
        success: true,
        count_total: products.len(),
        message: "All Products".to_string(),
        products,
    }))
}

pub async fn get_single_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<SingleProductResponse>> {
    let slug = require_text(&slug, "slug")?;

    let product = state
        .store
        .product_by_slug(slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(SingleProductResponse {
        success: true,
        message: "Single Product Fetched".to_string(),
        product,
    }))
}

pub async fn product_photo(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<Response> {
    let id = parse_id(&pid, "product id")?;

    let photo = state
        .store
        .product_photo(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let (Some(data), Some(content_type)) = (photo.photo_data, photo.photo_content_type) else {
        return Err(AppError::NotFound("Product photo not found".to_string()));
    };

    let content_type = HeaderValue::from_str(&content_type)
        .map_err(|_| AppError::InternalError(format!("Invalid stored content type: {}", content_type)))?;

    Ok(([(header::CONTENT_TYPE, content_type)], data).into_response())
}

pub async fn search_products(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Result<Json<Vec<ProductSummary>>> {
    let keyword = require_text(&keyword, "keyword")?;
    let products = state.store.search_products(keyword).await?;

    Ok(Json(products))
}

pub async fn related_products(
    State(state): State<AppState>,
    Path((pid, cid)): Path<(String, String)>,
) -> Result<Json<ProductListResponse>> {
    let product_id = parse_id(&pid, "product id")?;
    let category_id = parse_id(&cid, "category id")?;

    let products = state
        .store
        .related_products(product_id, category_id, RELATED_LIMIT)
        .await?;

    Ok(Json(ProductListResponse::ok(products)))
}

pub async fn products_by_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryProductsResponse>> {
    let slug = require_text(&slug, "slug")?;

    let category = state
        .store
        .category_by_slug(slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

    let products = state.store.products_in_category(category.id).await?;

    Ok(Json(CategoryProductsResponse {
        success: true,
        category,
        products,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive_integers() {
        assert_eq!(parse_id("42", "product id").unwrap(), 42);
        assert!(parse_id("0", "product id").is_err());
        assert!(parse_id("-1", "product id").is_err());
        assert!(parse_id("p1", "product id").is_err());
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(require_text(" phone ", "keyword").unwrap(), "phone");
        assert!(require_text("   ", "keyword").is_err());
    }
}
