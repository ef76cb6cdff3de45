use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateProductParams {
    pub id: Uuid,
    pub user_id: UserId,
    pub category_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub price: f64,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
