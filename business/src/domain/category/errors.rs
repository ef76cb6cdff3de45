#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.name_empty")]
    NameEmpty,
    #[error("category.not_found")]
    NotFound,
    #[error("category.already_exists")]
    AlreadyExists,
    #[error("category.forbidden")]
    Forbidden,
    #[error("category.owner_not_found")]
    OwnerNotFound,
    #[error("category.invalid_credentials")]
    InvalidCredentials,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
