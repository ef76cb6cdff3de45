use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Products in every category owned by `user_id`.
    async fn get_all_by_owner(&self, user_id: &UserId) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_category(&self, category_id: Uuid) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
