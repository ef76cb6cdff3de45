use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::sale::errors::SaleError;
use crate::domain::sale::repository::SaleRepository;
use crate::domain::sale::summary::{SalesSummary, summarize};
use crate::domain::sale::use_cases::summary::{GetSalesSummaryParams, GetSalesSummaryUseCase};

pub struct GetSalesSummaryUseCaseImpl {
    pub repository: Arc<dyn SaleRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSalesSummaryUseCase for GetSalesSummaryUseCaseImpl {
    async fn execute(&self, params: GetSalesSummaryParams) -> Result<SalesSummary, SaleError> {
        self.logger
            .debug(&format!("Summarizing sales of user: {}", params.user_id));
        let sales = self.repository.get_all_by_seller(&params.user_id).await?;
        Ok(summarize(&sales))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{MockSaleRepo, mock_logger, stored_sale};

    #[tokio::test]
    async fn should_summarize_sales_of_seller() {
        let seller = UserId::generate();
        let mut sales = MockSaleRepo::new();
        sales.expect_get_all_by_seller().returning(|user_id| {
            Ok(vec![
                stored_sale(*user_id, None, 2, 3.5),
                stored_sale(*user_id, None, 1, 10.0),
            ])
        });

        let use_case = GetSalesSummaryUseCaseImpl {
            repository: Arc::new(sales),
            logger: mock_logger(),
        };

        let summary = use_case
            .execute(GetSalesSummaryParams { user_id: seller })
            .await
            .unwrap();

        assert_eq!(summary.sales_count, 2);
        assert_eq!(summary.units_sold, 3);
        assert_eq!(summary.revenue, 17.0);
    }
}
