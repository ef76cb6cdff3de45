use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCategoryUseCase for UpdateCategoryUseCaseImpl {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, CategoryError> {
        self.logger.info(&format!("Updating category: {}", params.id));

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
                "User {} tried to update category {} owned by {}",
                params.user_id, existing.id, existing.user_id
            ));
            return Err(CategoryError::Forbidden);
        }

        let updated = existing.renamed(&params.name)?;

        if let Some(other) = self.repository.find_by_name(&updated.name).await?
            && other.id != updated.id
        {
            return Err(CategoryError::AlreadyExists);
        }

        self.repository
            .save(&updated)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => CategoryError::AlreadyExists,
                other => CategoryError::Repository(other),
            })?;

        self.logger.info(&format!("Category updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{MockCategoryRepo, mock_logger, stored_category};

    #[tokio::test]
    async fn should_rename_owned_category() {
        let owner = UserId::generate();
        let existing = stored_category("Beverages", owner);
        let id = existing.id;
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(existing.clone()));
        repo.expect_find_by_name().returning(|_| Ok(None));
        repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateCategoryParams {
                id,
                user_id: owner,
                name: "Drinks".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Drinks");
    }

    #[tokio::test]
    async fn should_allow_keeping_same_name() {
        let owner = UserId::generate();
        let existing = stored_category("Beverages", owner);
        let id = existing.id;
        let same = existing.clone();
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(existing.clone()));
        repo.expect_find_by_name()
            .returning(move |_| Ok(Some(same.clone())));
        repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCategoryParams {
                id,
                user_id: owner,
                name: "Beverages".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_forbid_update_by_non_owner() {
        let existing = stored_category("Beverages", UserId::generate());
        let id = existing.id;
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(existing.clone()));
        repo.expect_save().never();

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCategoryParams {
                id,
                user_id: UserId::generate(),
                name: "Drinks".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::Forbidden));
    }

    #[tokio::test]
    async fn should_reject_name_taken_by_another_category() {
        let owner = UserId::generate();
        let existing = stored_category("Beverages", owner);
        let id = existing.id;
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(existing.clone()));
        repo.expect_find_by_name()
            .returning(move |name| Ok(Some(stored_category(name, owner))));
        repo.expect_save().never();

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCategoryParams {
                id,
                user_id: owner,
                name: "Snacks".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::AlreadyExists));
    }

    #[tokio::test]
    async fn should_return_not_found_when_category_missing() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCategoryParams {
                id: uuid::Uuid::new_v4(),
                user_id: UserId::generate(),
                name: "Drinks".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::NotFound));
    }
}
