use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::shared::value_objects::UserId;

pub struct GetCategoryByNameParams {
    pub name: String,
    pub user_id: UserId,
}

#[async_trait]
pub trait GetCategoryByNameUseCase: Send + Sync {
    async fn execute(&self, params: GetCategoryByNameParams) -> Result<Category, CategoryError>;
}
