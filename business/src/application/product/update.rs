use std::sync::Arc;

use async_trait::async_trait;

use super::ownership::{owned_category, owned_product};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDetails};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Updating product: {}", params.id));

        let existing = owned_product(
            self.repository.as_ref(),
            self.category_repository.as_ref(),
            params.id,
            &params.user_id,
        )
        .await?;

        // Moving the product needs ownership of the destination as well.
        if existing.category_id != params.category_id {
            owned_category(
                self.category_repository.as_ref(),
                params.category_id,
                &params.user_id,
            )
            .await?;
        }

        let updated = existing.with_details(ProductDetails {
            category_id: params.category_id,
            name: params.name,
            description: params.description,
            quantity: params.quantity,
            price: params.price,
        })?;

        self.repository.save(&updated).await?;

        self.logger.info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
