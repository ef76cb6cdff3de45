use uuid::Uuid;

use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::UserId;

/// Loads a category and checks that `user_id` owns it.
pub async fn owned_category(
    categories: &dyn CategoryRepository,
    category_id: Uuid,
    user_id: &UserId,
) -> Result<Category, ProductError> {
    let category = categories
        .get_by_id(category_id)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => ProductError::CategoryNotFound,
            other => ProductError::Repository(other),
        })?;

    if !category.is_owned_by(user_id) {
        return Err(ProductError::Forbidden);
    }

    Ok(category)
}

/// Loads a product and checks that `user_id` owns its category.
pub async fn owned_product(
    products: &dyn ProductRepository,
    categories: &dyn CategoryRepository,
    id: Uuid,
    user_id: &UserId,
) -> Result<Product, ProductError> {
    let product = products.get_by_id(id).await.map_err(|e| match e {
        RepositoryError::NotFound => ProductError::NotFound,
        other => ProductError::Repository(other),
    })?;

    owned_category(categories, product.category_id, user_id)
        .await
        .map_err(|e| match e {
            ProductError::CategoryNotFound => ProductError::NotFound,
            other => other,
        })?;

    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockCategoryRepo, MockProductRepo, stored_category, stored_product};

    #[tokio::test]
    async fn should_return_product_when_caller_owns_category() {
        let owner = UserId::generate();
        let category = stored_category("Coffee", owner);
        let product = stored_product(category.id, 5, 10.0);
        let product_id = product.id;

        let mut categories = MockCategoryRepo::new();
        categories
            .expect_get_by_id()
            .returning(move |_| Ok(category.clone()));
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(move |_| Ok(product.clone()));

        let found = owned_product(&products, &categories, product_id, &owner)
            .await
            .unwrap();

        assert_eq!(found.id, product_id);
    }

    #[tokio::test]
    async fn should_forbid_when_category_owned_by_someone_else() {
        let category = stored_category("Coffee", UserId::generate());
        let product = stored_product(category.id, 5, 10.0);
        let product_id = product.id;

        let mut categories = MockCategoryRepo::new();
        categories
            .expect_get_by_id()
            .returning(move |_| Ok(category.clone()));
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(move |_| Ok(product.clone()));

        let result = owned_product(&products, &categories, product_id, &UserId::generate()).await;

        assert!(matches!(result.unwrap_err(), ProductError::Forbidden));
    }

    #[tokio::test]
    async fn should_report_missing_category() {
        let mut categories = MockCategoryRepo::new();
        categories
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = owned_category(&categories, Uuid::new_v4(), &UserId::generate()).await;

        assert!(matches!(result.unwrap_err(), ProductError::CategoryNotFound));
    }
}
