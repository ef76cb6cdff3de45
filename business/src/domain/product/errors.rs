#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.negative_quantity")]
    NegativeQuantity,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.not_found")]
    NotFound,
    #[error("product.category_not_found")]
    CategoryNotFound,
    #[error("product.forbidden")]
    Forbidden,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
