use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::Session;

pub struct LogInParams {
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait LogInUseCase: Send + Sync {
    async fn execute(&self, params: LogInParams) -> Result<Session, UserError>;
}
