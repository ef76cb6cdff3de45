use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::shared::value_objects::UserId;

pub struct GetAllCategoriesParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetAllCategoriesUseCase: Send + Sync {
    async fn execute(&self, params: GetAllCategoriesParams)
    -> Result<Vec<Category>, CategoryError>;
}
