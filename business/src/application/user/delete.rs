use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};

pub struct DeleteUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteUserUseCase for DeleteUserUseCaseImpl {
    async fn execute(&self, params: DeleteUserParams) -> Result<(), UserError> {
        self.logger
            .info(&format!("Deleting user: {}", params.user_id));

        self.repository
            .get_by_id(&params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        // Owned categories, products and sales go with the user row.
        self.repository.delete(&params.user_id).await?;

        self.logger.info(&format!("User deleted: {}", params.user_id));
        Ok(())
    }
}
