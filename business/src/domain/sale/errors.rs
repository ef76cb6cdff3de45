#[derive(Debug, thiserror::Error)]
pub enum SaleError {
    #[error("sale.invalid_amount")]
    InvalidAmount,
    #[error("sale.insufficient_stock")]
    InsufficientStock,
    #[error("sale.product_not_found")]
    ProductNotFound,
    #[error("sale.forbidden")]
    Forbidden,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
