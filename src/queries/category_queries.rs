use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Category, NewCategory},
};

/// Find category by ID
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Category>> {
    let category =
        sqlx::query_as::<_, Category>("SELECT id, name, slug FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(category)
}

/// Find category by slug
pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Category>> {
    let category =
        sqlx::query_as::<_, Category>("SELECT id, name, slug FROM categories WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await?;

    Ok(category)
}

/// Get all categories (flat list)
pub async fn get_all(pool: &PgPool) -> Result<Vec<Category>> {
    let categories =
        sqlx::query_as::<_, Category>("SELECT id, name, slug FROM categories ORDER BY name ASC")
            .fetch_all(pool)
            .await?;

    Ok(categories)
}

/// Create a new category
pub async fn create_category(pool: &PgPool, new: &NewCategory) -> Result<Category> {
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name, slug)
         VALUES ($1, $2)
         RETURNING id, name, slug",
    )
    .bind(&new.name)
    .bind(&new.slug)
    .fetch_one(pool)
    .await?;

    Ok(category)
}
