use std::sync::Arc;

use async_trait::async_trait;

use super::ownership::owned_category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError> {
        let products = match params.category_id {
            Some(category_id) => {
                self.logger
                    .debug(&format!("Listing products of category: {}", category_id));
                owned_category(
                    self.category_repository.as_ref(),
                    category_id,
                    &params.user_id,
                )
                .await?;
                self.repository.get_by_category(category_id).await?
            }
            None => {
                self.logger
                    .debug(&format!("Listing products of user: {}", params.user_id));
                self.repository.get_all_by_owner(&params.user_id).await?
            }
        };

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{
        MockCategoryRepo, MockProductRepo, mock_logger, stored_category, stored_product,
    };
    use uuid::Uuid;

    #[tokio::test]
    async fn should_list_all_owned_products_when_no_filter() {
        let owner = UserId::generate();
        let mut products = MockProductRepo::new();
        products
            .expect_get_all_by_owner()
            .withf(move |user_id| *user_id == owner)
            .returning(|_| {
                Ok(vec![
                    stored_product(Uuid::new_v4(), 1, 1.0),
                    stored_product(Uuid::new_v4(), 2, 2.0),
                ])
            });
        products.expect_get_by_category().never();

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(products),
            category_repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let listed = use_case
            .execute(GetAllProductsParams {
                user_id: owner,
                category_id: None,
            })
            .await
            .unwrap();

        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn should_filter_by_owned_category() {
        let owner = UserId::generate();
        let category = stored_category("Coffee", owner);
        let category_id = category.id;
        let mut categories = MockCategoryRepo::new();
        categories
            .expect_get_by_id()
            .returning(move |_| Ok(category.clone()));
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_category()
            .withf(move |id| *id == category_id)
            .returning(|id| Ok(vec![stored_product(id, 3, 1.0)]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(products),
            category_repository: Arc::new(categories),
            logger: mock_logger(),
        };

        let listed = use_case
            .execute(GetAllProductsParams {
                user_id: owner,
                category_id: Some(category_id),
            })
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].category_id, category_id);
    }

    #[tokio::test]
    async fn should_forbid_listing_foreign_category() {
        let category = stored_category("Coffee", UserId::generate());
        let category_id = category.id;
        let mut categories = MockCategoryRepo::new();
        categories
            .expect_get_by_id()
            .returning(move |_| Ok(category.clone()));
        let mut products = MockProductRepo::new();
        products.expect_get_by_category().never();

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(products),
            category_repository: Arc::new(categories),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllProductsParams {
                user_id: UserId::generate(),
                category_id: Some(category_id),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Forbidden));
    }
}
