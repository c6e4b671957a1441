use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{CategoryListResponse, SingleCategoryResponse},
};

pub async fn get_all_categories(State(state): State<AppState>) -> Result<Json<CategoryListResponse>> {
    let categories = state.store.list_categories().await?;

    Ok(Json(CategoryListResponse {
        success: true,
        message: "All Categories List".to_string(),
        category: categories,
    }))
}

pub async fn get_single_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<SingleCategoryResponse>> {
    let category = state
        .store
        .category_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

    Ok(Json(SingleCategoryResponse {
        success: true,
        message: "Get Single Category Successfully".to_string(),
        category,
    }))
}
