use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Category;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all_by_owner(&self, user_id: &UserId) -> Result<Vec<Category>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError>;
    async fn save(&self, category: &Category) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
