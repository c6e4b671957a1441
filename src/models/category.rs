use serde::{Deserialize, Serialize};

use crate::catalog::slugify;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            slug: slugify(&name),
            name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub category: Vec<Category>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SingleCategoryResponse {
    pub success: bool,
    pub message: String,
    pub category: Category,
}
