use std::sync::Arc;

use async_trait::async_trait;

use super::record::from_product_error;
use crate::application::product::ownership::owned_product;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::Sale;
use crate::domain::sale::repository::SaleRepository;
use crate::domain::sale::use_cases::get_by_product::{
    GetSalesByProductParams, GetSalesByProductUseCase,
};

pub struct GetSalesByProductUseCaseImpl {
    pub repository: Arc<dyn SaleRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSalesByProductUseCase for GetSalesByProductUseCaseImpl {
    async fn execute(&self, params: GetSalesByProductParams) -> Result<Vec<Sale>, SaleError> {
        self.logger
            .debug(&format!("Listing sales of product: {}", params.product_id));

        owned_product(
            self.product_repository.as_ref(),
            self.category_repository.as_ref(),
            params.product_id,
            &params.user_id,
        )
        .await
        .map_err(from_product_error)?;

        let sales = self.repository.get_by_product(params.product_id).await?;
        Ok(sales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{
        MockCategoryRepo, MockProductRepo, MockSaleRepo, mock_logger, stored_category,
        stored_product, stored_sale,
    };
    use uuid::Uuid;

    #[tokio::test]
    async fn should_list_sales_of_owned_product() {
        let owner = UserId::generate();
        let category = stored_category("Coffee", owner);
        let product = stored_product(category.id, 4, 2.0);
        let product_id = product.id;
        let mut categories = MockCategoryRepo::new();
        categories
            .expect_get_by_id()
            .returning(move |_| Ok(category.clone()));
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(move |_| Ok(product.clone()));
        let mut sales = MockSaleRepo::new();
        sales.expect_get_by_product().returning(move |id| {
            Ok(vec![
                stored_sale(owner, Some(id), 1, 2.0),
                stored_sale(owner, Some(id), 2, 2.0),
            ])
        });

        let use_case = GetSalesByProductUseCaseImpl {
            repository: Arc::new(sales),
            product_repository: Arc::new(products),
            category_repository: Arc::new(categories),
            logger: mock_logger(),
        };

        let listed = use_case
            .execute(GetSalesByProductParams {
                user_id: owner,
                product_id,
            })
            .await
            .unwrap();

        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|s| s.product_id == Some(product_id)));
    }

    #[tokio::test]
    async fn should_report_missing_product() {
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut sales = MockSaleRepo::new();
        sales.expect_get_by_product().never();

        let use_case = GetSalesByProductUseCaseImpl {
            repository: Arc::new(sales),
            product_repository: Arc::new(products),
            category_repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetSalesByProductParams {
                user_id: UserId::generate(),
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), SaleError::ProductNotFound));
    }
}
