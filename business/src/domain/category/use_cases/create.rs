use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;

/// Creating a category re-checks the owner's credentials.
pub struct CreateCategoryParams {
    pub name: String,
    pub owner_email: String,
    pub owner_password: String,
}

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError>;
}
