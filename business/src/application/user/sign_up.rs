use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUserProps, User, normalize_email, validate_password};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::sign_up::{SignUpParams, SignUpUseCase};

pub struct SignUpUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignUpUseCase for SignUpUseCaseImpl {
    async fn execute(&self, params: SignUpParams) -> Result<User, UserError> {
        let email = normalize_email(&params.email);
        self.logger.info(&format!("Signing up user: {}", email));

        validate_password(&params.password)?;

        let user = User::new(NewUserProps {
            email,
            password_hash: String::new(),
            first_name: params.first_name,
            last_name: params.last_name,
        })?;

        if self.repository.find_by_email(&user.email).await?.is_some() {
            self.logger
                .warn(&format!("Email already registered: {}", user.email));
            return Err(UserError::EmailTaken);
        }

        let user = User {
            password_hash: self.hasher.hash(&params.password)?,
            ..user
        };

        self.repository.save(&user).await.map_err(|e| match e {
            RepositoryError::Duplicated => UserError::EmailTaken,
            other => UserError::Repository(other),
        })?;

        self.logger.info(&format!("User created with id: {}", user.id));
        Ok(user)
    }
}
