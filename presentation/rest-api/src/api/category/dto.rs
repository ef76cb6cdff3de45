use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::category::model::Category;

/// The owner proves who they are with their login credentials.
#[derive(Debug, Clone, Object)]
pub struct CreateCategoryRequest {
    /// Category name (unique, cannot be empty)
    pub name: String,
    /// Owner's login email
    pub email: String,
    /// Owner's password
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCategoryRequest {
    /// New category name
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    pub id: String,
    /// Owning user
    pub user_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            user_id: category.user_id.to_string(),
            name: category.name,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
