use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct SignUpParams {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[async_trait]
pub trait SignUpUseCase: Send + Sync {
    async fn execute(&self, params: SignUpParams) -> Result<User, UserError>;
}
