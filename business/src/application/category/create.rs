use std::sync::Arc;

use async_trait::async_trait;

use crate::application::user::credentials::authenticate;
use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;

pub struct CreateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCategoryUseCase for CreateCategoryUseCaseImpl {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Creating category: {}", params.name));

        let owner = authenticate(
            self.user_repository.as_ref(),
            self.hasher.as_ref(),
            &params.owner_email,
            &params.owner_password,
        )
        .await
        .map_err(|e| match e {
            UserError::NotFound => CategoryError::OwnerNotFound,
            UserError::Repository(other) => CategoryError::Repository(other),
            _ => CategoryError::InvalidCredentials,
        })?;

        let category = Category::new(&params.name, owner.id)?;

        if self
            .repository
            .find_by_name(&category.name)
            .await?
            .is_some()
        {
            return Err(CategoryError::AlreadyExists);
        }

        self.repository
            .save(&category)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => CategoryError::AlreadyExists,
                other => CategoryError::Repository(other),
            })?;

        self.logger
            .info(&format!("Category created with id: {}", category.id));
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{
        MockCategoryRepo, MockUserRepo, mock_logger, prefix_hasher, stored_category, stored_user,
    };

    fn params(name: &str, password: &str) -> CreateCategoryParams {
        CreateCategoryParams {
            name: name.to_string(),
            owner_email: "ada@example.com".to_string(),
            owner_password: password.to_string(),
        }
    }

    fn users_with_ada() -> MockUserRepo {
        let mut users = MockUserRepo::new();
        users
            .expect_find_by_email()
            .returning(|email| Ok(Some(stored_user(email, "correct-horse"))));
        users
    }

    #[tokio::test]
    async fn should_create_category_owned_by_authenticated_user() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_find_by_name().returning(|_| Ok(None));
        repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            user_repository: Arc::new(users_with_ada()),
            hasher: Arc::new(prefix_hasher()),
            logger: mock_logger(),
        };

        let category = use_case
            .execute(params("Beverages", "correct-horse"))
            .await
            .unwrap();

        assert_eq!(category.name, "Beverages");
    }

    #[tokio::test]
    async fn should_refuse_when_password_wrong() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_save().never();

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            user_repository: Arc::new(users_with_ada()),
            hasher: Arc::new(prefix_hasher()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Beverages", "nope")).await;

        assert!(matches!(
            result.unwrap_err(),
            CategoryError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn should_refuse_when_owner_unknown() {
        let mut users = MockUserRepo::new();
        users.expect_find_by_email().returning(|_| Ok(None));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(MockCategoryRepo::new()),
            user_repository: Arc::new(users),
            hasher: Arc::new(prefix_hasher()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Beverages", "correct-horse")).await;

        assert!(matches!(result.unwrap_err(), CategoryError::OwnerNotFound));
    }

    #[tokio::test]
    async fn should_reject_duplicate_name() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_find_by_name()
            .returning(|name| Ok(Some(stored_category(name, UserId::generate()))));
        repo.expect_save().never();

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            user_repository: Arc::new(users_with_ada()),
            hasher: Arc::new(prefix_hasher()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Beverages", "correct-horse")).await;

        assert!(matches!(result.unwrap_err(), CategoryError::AlreadyExists));
    }

    #[tokio::test]
    async fn should_reject_blank_name() {
        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(MockCategoryRepo::new()),
            user_repository: Arc::new(users_with_ada()),
            hasher: Arc::new(prefix_hasher()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("  ", "correct-horse")).await;

        assert!(matches!(result.unwrap_err(), CategoryError::NameEmpty));
    }
}
