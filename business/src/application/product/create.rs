use std::sync::Arc;

use async_trait::async_trait;

use super::ownership::owned_category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDetails};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Creating product: {} in category {}",
            params.name, params.category_id
        ));

        let product = Product::new(ProductDetails {
            category_id: params.category_id,
            name: params.name,
            description: params.description,
            quantity: params.quantity,
            price: params.price,
        })?;

        owned_category(
            self.category_repository.as_ref(),
            product.category_id,
            &params.user_id,
        )
        .await?;

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{MockCategoryRepo, MockProductRepo, mock_logger, stored_category};
    use uuid::Uuid;

    fn params(user_id: UserId, category_id: Uuid, name: &str, quantity: i32) -> CreateProductParams {
        CreateProductParams {
            user_id,
            category_id,
            name: name.to_string(),
            description: None,
            quantity,
            price: 4.5,
        }
    }

    #[tokio::test]
    async fn should_create_product_in_owned_category() {
        let owner = UserId::generate();
        let category = stored_category("Coffee", owner);
        let category_id = category.id;
        let mut categories = MockCategoryRepo::new();
        categories
            .expect_get_by_id()
            .returning(move |_| Ok(category.clone()));
        let mut products = MockProductRepo::new();
        products.expect_save().times(1).returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(products),
            category_repository: Arc::new(categories),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(params(owner, category_id, "Flat White Blend", 12))
            .await
            .unwrap();

        assert_eq!(product.category_id, category_id);
        assert_eq!(product.quantity, 12);
    }

    #[tokio::test]
    async fn should_forbid_creating_in_foreign_category() {
        let category = stored_category("Coffee", UserId::generate());
        let category_id = category.id;
        let mut categories = MockCategoryRepo::new();
        categories
            .expect_get_by_id()
            .returning(move |_| Ok(category.clone()));
        let mut products = MockProductRepo::new();
        products.expect_save().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(products),
            category_repository: Arc::new(categories),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(UserId::generate(), category_id, "Blend", 1))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Forbidden));
    }

    #[tokio::test]
    async fn should_reject_when_category_missing() {
        let mut categories = MockCategoryRepo::new();
        categories
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            category_repository: Arc::new(categories),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(UserId::generate(), Uuid::new_v4(), "Blend", 1))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::CategoryNotFound));
    }

    #[tokio::test]
    async fn should_validate_before_looking_up_category() {
        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            category_repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(UserId::generate(), Uuid::new_v4(), "Blend", -2))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NegativeQuantity));
    }
}
