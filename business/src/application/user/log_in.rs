use std::sync::Arc;

use async_trait::async_trait;

use super::credentials::authenticate;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::Session;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{PasswordHasher, TokenService};
use crate::domain::user::use_cases::log_in::{LogInParams, LogInUseCase};

pub struct LogInUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogInUseCase for LogInUseCaseImpl {
    async fn execute(&self, params: LogInParams) -> Result<Session, UserError> {
        self.logger.info(&format!("Logging in: {}", params.email));

        let user = authenticate(
            self.repository.as_ref(),
            self.hasher.as_ref(),
            &params.email,
            &params.password,
        )
        .await
        .inspect_err(|e| self.logger.warn(&format!("Login refused: {}", e)))?;

        let access_token = self.tokens.issue(&user.id)?;

        self.logger.info(&format!("User logged in: {}", user.id));
        Ok(Session { user, access_token })
    }
}
