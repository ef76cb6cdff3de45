use async_trait::async_trait;

use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::Sale;
use crate::domain::shared::value_objects::UserId;

pub struct GetAllSalesParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetAllSalesUseCase: Send + Sync {
    async fn execute(&self, params: GetAllSalesParams) -> Result<Vec<Sale>, SaleError>;
}
