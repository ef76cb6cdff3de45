use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct GetUserByIdParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetUserByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetUserByIdParams) -> Result<User, UserError>;
}
