use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{catalog::slugify, models::Category};

/// Product row as returned by every listing query. The photo blob is never
/// selected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductSummary {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: i32,
    pub quantity: i32,
    pub shipping: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: ProductSummary,
    pub category: Option<Category>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductPhoto {
    pub photo_data: Option<Vec<u8>>,
    pub photo_content_type: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: i32,
    pub quantity: i32,
    pub shipping: bool,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        category_id: i32,
        quantity: i32,
    ) -> Self {
        let name = name.into();
        Self {
            slug: slugify(&name),
            name,
            description: description.into(),
            price,
            category_id,
            quantity,
            shipping: false,
        }
    }

    pub fn with_shipping(mut self, shipping: bool) -> Self {
        self.shipping = shipping;
        self
    }
}

// Request types

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub checked: Vec<i32>,
    #[serde(default)]
    pub radio: Vec<Decimal>,
}

// Response types

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductListResponse {
    #[serde(default)]
    pub success: bool,
    pub products: Vec<ProductSummary>,
}

impl ProductListResponse {
    pub fn ok(products: Vec<ProductSummary>) -> Self {
        Self {
            success: true,
            products,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductCountResponse {
    #[serde(default)]
    pub success: bool,
    pub total: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeaturedProductsResponse {
    pub success: bool,
    #[serde(rename = "countTotal")]
    pub count_total: usize,
    pub message: String,
    pub products: Vec<ProductSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SingleProductResponse {
    pub success: bool,
    pub message: String,
    pub product: ProductDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryProductsResponse {
    pub success: bool,
    pub category: Category,
    pub products: Vec<ProductSummary>,
}
