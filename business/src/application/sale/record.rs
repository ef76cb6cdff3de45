use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::ownership::owned_product;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::Sale;
use crate::domain::sale::repository::SaleRepository;
use crate::domain::sale::use_cases::record::{RecordSaleParams, RecordSaleUseCase};

pub struct RecordSaleUseCaseImpl {
    pub repository: Arc<dyn SaleRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

pub(crate) fn from_product_error(error: ProductError) -> SaleError {
    match error {
        ProductError::Forbidden => SaleError::Forbidden,
        ProductError::Repository(other) => SaleError::Repository(other),
        _ => SaleError::ProductNotFound,
    }
}

#[async_trait]
impl RecordSaleUseCase for RecordSaleUseCaseImpl {
    async fn execute(&self, params: RecordSaleParams) -> Result<Sale, SaleError> {
        self.logger.info(&format!(
            "Recording sale of {} unit(s) of product {}",
            params.amount, params.product_id
        ));

        let product = owned_product(
            self.product_repository.as_ref(),
            self.category_repository.as_ref(),
            params.product_id,
            &params.user_id,
        )
        .await
        .map_err(from_product_error)?;

        let sale = Sale::of_product(&product, params.user_id, params.amount)?;

        if !product.has_stock(sale.amount) {
            self.logger.warn(&format!(
                "Insufficient stock for product {}: {} requested, {} available",
                product.id, sale.amount, product.quantity
            ));
            return Err(SaleError::InsufficientStock);
        }

        // The stock may have moved since the read above; the repository
        // re-checks it inside the write.
        self.repository.record(&sale).await.map_err(|e| match e {
            RepositoryError::Conflict => SaleError::InsufficientStock,
            RepositoryError::NotFound => SaleError::ProductNotFound,
            other => SaleError::Repository(other),
        })?;

        self.logger.info(&format!("Sale recorded with id: {}", sale.id));
        Ok(sale)
    }
}
