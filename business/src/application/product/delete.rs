use std::sync::Arc;

use async_trait::async_trait;

use super::ownership::owned_product;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger.info(&format!("Deleting product: {}", params.id));

        owned_product(
            self.repository.as_ref(),
            self.category_repository.as_ref(),
            params.id,
            &params.user_id,
        )
        .await?;

        // Recorded sales keep their snapshot; only the link is cleared.
        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
