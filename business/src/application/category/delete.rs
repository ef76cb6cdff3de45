use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCategoryUseCase for DeleteCategoryUseCaseImpl {
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError> {
        self.logger.info(&format!("Deleting category: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CategoryError::NotFound,
                other => CategoryError::Repository(other),
            })?;

        if !existing.is_owned_by(&params.user_id) {
            self.logger.warn(&format!(
                "User {} tried to delete category {} owned by {}",
                params.user_id, existing.id, existing.user_id
            ));
            return Err(CategoryError::Forbidden);
        }

        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Category deleted: {}", params.id));
        Ok(())
    }
}
