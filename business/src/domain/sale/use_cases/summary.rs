use async_trait::async_trait;

use crate::domain::sale::errors::SaleError;
use crate::domain::sale::summary::SalesSummary;
use crate::domain::shared::value_objects::UserId;

pub struct GetSalesSummaryParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetSalesSummaryUseCase: Send + Sync {
    async fn execute(&self, params: GetSalesSummaryParams) -> Result<SalesSummary, SaleError>;
}
