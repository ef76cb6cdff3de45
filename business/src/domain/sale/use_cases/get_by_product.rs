use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::Sale;
use crate::domain::shared::value_objects::UserId;

pub struct GetSalesByProductParams {
    pub user_id: UserId,
    pub product_id: Uuid,
}

#[async_trait]
pub trait GetSalesByProductUseCase: Send + Sync {
    async fn execute(&self, params: GetSalesByProductParams) -> Result<Vec<Sale>, SaleError>;
}
