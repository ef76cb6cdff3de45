use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateCategoryParams {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
}

#[async_trait]
pub trait UpdateCategoryUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, CategoryError>;
}
