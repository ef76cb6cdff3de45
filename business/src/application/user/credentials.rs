use crate::domain::user::errors::UserError;
use crate::domain::user::model::{User, normalize_email};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;

/// Resolves an email/password pair to the stored user.
///
/// Shared by login and by every operation that re-validates credentials.
pub async fn authenticate(
    repository: &dyn UserRepository,
    hasher: &dyn PasswordHasher,
    email: &str,
    password: &str,
) -> Result<User, UserError> {
    let user = repository
        .find_by_email(&normalize_email(email))
        .await?
        .ok_or(UserError::NotFound)?;

    if !hasher.verify(password, &user.password_hash) {
        return Err(UserError::InvalidPassword);
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockUserRepo, prefix_hasher, stored_user};

    #[tokio::test]
    async fn should_return_user_when_password_matches() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_email()
            .withf(|email| email == "ada@example.com")
            .returning(|email| Ok(Some(stored_user(email, "correct-horse"))));

        let user = authenticate(&repo, &prefix_hasher(), " ADA@example.com", "correct-horse")
            .await
            .unwrap();

        assert_eq!(user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn should_reject_when_password_differs() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(stored_user(email, "correct-horse"))));

        let result = authenticate(&repo, &prefix_hasher(), "ada@example.com", "wrong").await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidPassword));
    }

    #[tokio::test]
    async fn should_report_not_found_when_email_unknown() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let result = authenticate(&repo, &prefix_hasher(), "nobody@example.com", "x").await;

        assert!(matches!(result.unwrap_err(), UserError::NotFound));
    }
}
