use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Sale;

#[async_trait]
pub trait SaleRepository: Send + Sync {
    async fn get_all_by_seller(&self, user_id: &UserId) -> Result<Vec<Sale>, RepositoryError>;
    async fn get_by_product(&self, product_id: Uuid) -> Result<Vec<Sale>, RepositoryError>;

    /// Stores the sale and takes `sale.amount` units from the linked
    /// product's stock as one atomic step.
    ///
    /// Fails with [`RepositoryError::Conflict`] when the stock no longer
    /// covers the amount, and with [`RepositoryError::NotFound`] when the
    /// product is gone.
    async fn record(&self, sale: &Sale) -> Result<(), RepositoryError>;
}
