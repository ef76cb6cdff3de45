use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

#[async_trait]
pub trait GetAllUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<User>, UserError>;
}
