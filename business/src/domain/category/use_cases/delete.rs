use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::category::errors::CategoryError;
use crate::domain::shared::value_objects::UserId;

pub struct DeleteCategoryParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait DeleteCategoryUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError>;
}
