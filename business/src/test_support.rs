use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::sale::model::Sale;
use crate::domain::sale::repository::SaleRepository;
use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{AccessToken, PasswordHasher, TokenService};

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
        async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
        async fn save(&self, user: &User) -> Result<(), RepositoryError>;
        async fn delete(&self, id: &UserId) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn get_all_by_owner(&self, user_id: &UserId) -> Result<Vec<Category>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError>;
        async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError>;
        async fn save(&self, category: &Category) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all_by_owner(&self, user_id: &UserId) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_category(&self, category_id: Uuid) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub SaleRepo {}

    #[async_trait]
    impl SaleRepository for SaleRepo {
        async fn get_all_by_seller(&self, user_id: &UserId) -> Result<Vec<Sale>, RepositoryError>;
        async fn get_by_product(&self, product_id: Uuid) -> Result<Vec<Sale>, RepositoryError>;
        async fn record(&self, sale: &Sale) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Hasher {}

    impl PasswordHasher for Hasher {
        fn hash(&self, password: &str) -> Result<String, UserError>;
        fn verify(&self, password: &str, password_hash: &str) -> bool;
    }
}

mock! {
    pub Tokens {}

    impl TokenService for Tokens {
        fn issue(&self, user_id: &UserId) -> Result<AccessToken, UserError>;
        fn verify(&self, token: &str) -> Result<UserId, UserError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Hasher whose "hash" is the password prefixed with `hashed:`.
pub fn prefix_hasher() -> MockHasher {
    let mut hasher = MockHasher::new();
    hasher
        .expect_hash()
        .returning(|password| Ok(format!("hashed:{password}")));
    hasher
        .expect_verify()
        .returning(|password, hash| hash == format!("hashed:{password}"));
    hasher
}

pub fn stored_user(email: &str, password: &str) -> User {
    User::from_repository(
        UserId::generate(),
        email.to_string(),
        format!("hashed:{password}"),
        "Ada".to_string(),
        "Lovelace".to_string(),
        Utc::now(),
        Utc::now(),
    )
}

pub fn stored_category(name: &str, owner: UserId) -> Category {
    Category::from_repository(Uuid::new_v4(), owner, name.to_string(), Utc::now(), Utc::now())
}

pub fn stored_product(category_id: Uuid, quantity: i32, price: f64) -> Product {
    Product::from_repository(
        Uuid::new_v4(),
        category_id,
        "Espresso Beans".to_string(),
        Some("1kg bag".to_string()),
        quantity,
        price,
        Utc::now(),
        Utc::now(),
    )
}

pub fn stored_sale(seller: UserId, product_id: Option<Uuid>, amount: i32, price: f64) -> Sale {
    Sale::from_repository(
        Uuid::new_v4(),
        seller,
        product_id,
        "Espresso Beans".to_string(),
        None,
        amount,
        price,
        Utc::now(),
    )
}
