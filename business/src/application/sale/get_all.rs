use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::Sale;
use crate::domain::sale::repository::SaleRepository;
use crate::domain::sale::use_cases::get_all::{GetAllSalesParams, GetAllSalesUseCase};

pub struct GetAllSalesUseCaseImpl {
    pub repository: Arc<dyn SaleRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllSalesUseCase for GetAllSalesUseCaseImpl {
    async fn execute(&self, params: GetAllSalesParams) -> Result<Vec<Sale>, SaleError> {
        self.logger
            .debug(&format!("Listing sales of user: {}", params.user_id));
        let sales = self.repository.get_all_by_seller(&params.user_id).await?;
        Ok(sales)
    }
}
