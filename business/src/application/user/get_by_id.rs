use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_by_id::{GetUserByIdParams, GetUserByIdUseCase};

pub struct GetUserByIdUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserByIdUseCase for GetUserByIdUseCaseImpl {
    async fn execute(&self, params: GetUserByIdParams) -> Result<User, UserError> {
        self.logger
            .debug(&format!("Fetching user: {}", params.user_id));

        self.repository
            .get_by_id(&params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{MockUserRepo, mock_logger, stored_user};

    #[tokio::test]
    async fn should_return_user_when_exists() {
        let mut repo = MockUserRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Ok(stored_user("ada@example.com", "pw")));

        let use_case = GetUserByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let user = use_case
            .execute(GetUserByIdParams {
                user_id: UserId::generate(),
            })
            .await
            .unwrap();

        assert_eq!(user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut repo = MockUserRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetUserByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetUserByIdParams {
                user_id: UserId::generate(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::NotFound));
    }
}
