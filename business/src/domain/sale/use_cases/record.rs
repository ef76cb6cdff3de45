use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::Sale;
use crate::domain::shared::value_objects::UserId;

pub struct RecordSaleParams {
    pub user_id: UserId,
    pub product_id: Uuid,
    pub amount: i32,
}

#[async_trait]
pub trait RecordSaleUseCase: Send + Sync {
    async fn execute(&self, params: RecordSaleParams) -> Result<Sale, SaleError>;
}
