use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    catalog::ProductFilter,
    error::Result,
    models::{NewProduct, ProductPhoto, ProductSummary},
};

const SUMMARY_COLUMNS: &str =
    "id, name, slug, description, price, category_id, quantity, shipping, created_at, updated_at";

// Newest first; id breaks ties so consecutive pages never overlap.
const NEWEST_FIRST: &str = " ORDER BY created_at DESC, id DESC";

pub async fn count(pool: &PgPool) -> Result<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    Ok(total)
}

pub async fn list_page(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<ProductSummary>> {
    let products = sqlx::query_as::<_, ProductSummary>(&format!(
        "SELECT {} FROM products{} LIMIT $1 OFFSET $2",
        SUMMARY_COLUMNS, NEWEST_FIRST
    ))
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

/// Builds the single statement answering a filter request. Category
/// membership and the inclusive price bounds are ANDed when both are set.
pub fn build_filter_query(filter: &ProductFilter) -> QueryBuilder<'static, Postgres> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new(format!(
        "SELECT {} FROM products WHERE 1=1",
        SUMMARY_COLUMNS
    ));

    if !filter.categories().is_empty() {
        query.push(" AND category_id = ANY(");
        query.push_bind(filter.categories().to_vec());
        query.push(")");
    }

    if let Some(range) = filter.price() {
        query.push(" AND price >= ");
        query.push_bind(range.low());
        query.push(" AND price <= ");
        query.push_bind(range.high());
    }

    query.push(NEWEST_FIRST);
    query
}

pub async fn filter(pool: &PgPool, filter: &ProductFilter) -> Result<Vec<ProductSummary>> {
    let mut query = build_filter_query(filter);
    let products = query
        .build_query_as::<ProductSummary>()
        .fetch_all(pool)
        .await?;

    Ok(products)
}

pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<ProductSummary>> {
    let product = sqlx::query_as::<_, ProductSummary>(&format!(
        "SELECT {} FROM products WHERE slug = $1",
        SUMMARY_COLUMNS
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn find_photo(pool: &PgPool, id: i32) -> Result<Option<ProductPhoto>> {
    let photo = sqlx::query_as::<_, ProductPhoto>(
        "SELECT photo_data, photo_content_type FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(photo)
}

/// Escapes LIKE wildcards so the keyword is matched literally.
fn like_pattern(keyword: &str) -> String {
    let escaped = keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

pub async fn search(pool: &PgPool, keyword: &str) -> Result<Vec<ProductSummary>> {
    let products = sqlx::query_as::<_, ProductSummary>(&format!(
        "SELECT {} FROM products WHERE name ILIKE $1 OR description ILIKE $1{}",
        SUMMARY_COLUMNS, NEWEST_FIRST
    ))
    .bind(like_pattern(keyword))
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn related(
    pool: &PgPool,
    product_id: i32,
    category_id: i32,
    limit: i64,
) -> Result<Vec<ProductSummary>> {
    let products = sqlx::query_as::<_, ProductSummary>(&format!(
        "SELECT {} FROM products WHERE category_id = $1 AND id <> $2{} LIMIT $3",
        SUMMARY_COLUMNS, NEWEST_FIRST
    ))
    .bind(category_id)
    .bind(product_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn in_category(pool: &PgPool, category_id: i32) -> Result<Vec<ProductSummary>> {
    let products = sqlx::query_as::<_, ProductSummary>(&format!(
        "SELECT {} FROM products WHERE category_id = $1{}",
        SUMMARY_COLUMNS, NEWEST_FIRST
    ))
    .bind(category_id)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn create_product(pool: &PgPool, new: &NewProduct) -> Result<ProductSummary> {
    let product = sqlx::query_as::<_, ProductSummary>(&format!(
        "INSERT INTO products (name, slug, description, price, category_id, quantity, shipping)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING {}",
        SUMMARY_COLUMNS
    ))
    .bind(&new.name)
    .bind(&new.slug)
    .bind(&new.description)
    .bind(new.price)
    .bind(new.category_id)
    .bind(new.quantity)
    .bind(new.shipping)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::catalog::PriceRange;

    fn range(low: i64, high: i64) -> PriceRange {
        PriceRange::new(Decimal::from(low), Decimal::from(high)).unwrap()
    }

    #[test]
    fn category_and_price_predicates_are_anded() {
        let filter = ProductFilter::new([1, 2], Some(range(0, 19))).unwrap();
        let query = build_filter_query(&filter);

        assert!(query.sql().ends_with(
            "WHERE 1=1 AND category_id = ANY($1) AND price >= $2 AND price <= $3 ORDER BY created_at DESC, id DESC"
        ));
    }

    #[test]
    fn category_only_filter_has_no_price_bounds() {
        let filter = ProductFilter::new([4], None).unwrap();
        let query = build_filter_query(&filter);

        assert!(query.sql().contains("category_id = ANY($1)"));
        assert!(!query.sql().contains("price >="));
    }

    #[test]
    fn price_only_filter_has_no_category_predicate() {
        let filter = ProductFilter::new([], Some(range(0, 50))).unwrap();
        let query = build_filter_query(&filter);

        assert!(!query.sql().contains("category_id = ANY"));
        assert!(query.sql().contains("price >= $1 AND price <= $2"));
    }

    #[test]
    fn filter_query_never_paginates() {
        let filter = ProductFilter::new([1], Some(range(20, 39))).unwrap();
        let query = build_filter_query(&filter);

        assert!(!query.sql().contains("LIMIT"));
        assert!(!query.sql().contains("OFFSET"));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("phone"), "%phone%");
        assert_eq!(like_pattern("100%_off"), "%100\\%\\_off%");
    }
}
