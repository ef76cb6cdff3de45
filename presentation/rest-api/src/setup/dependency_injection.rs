use std::sync::Arc;

use logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::sale::repository::SaleRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;
use security::{Argon2PasswordHasher, JwtTokenService};

use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::category::get_by_name::GetCategoryByNameUseCaseImpl;
use business::application::category::update::UpdateCategoryUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::sale::get_all::GetAllSalesUseCaseImpl;
use business::application::sale::get_by_product::GetSalesByProductUseCaseImpl;
use business::application::sale::record::RecordSaleUseCaseImpl;
use business::application::sale::summary::GetSalesSummaryUseCaseImpl;
use business::application::user::delete::DeleteUserUseCaseImpl;
use business::application::user::get_all::GetAllUsersUseCaseImpl;
use business::application::user::get_by_id::GetUserByIdUseCaseImpl;
use business::application::user::log_in::LogInUseCaseImpl;
use business::application::user::sign_up::SignUpUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::user::services::{PasswordHasher, TokenService};

use crate::api::category::routes::CategoryApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::sale::routes::SaleApi;
use crate::api::user::routes::UserApi;
use crate::config::auth_config::AuthConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub user_api: UserApi,
    pub category_api: CategoryApi,
    pub product_api: ProductApi,
    pub sale_api: SaleApi,
    /// Shared with the bearer security scheme through request data.
    pub token_service: Arc<dyn TokenService>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, auth: &AuthConfig) -> Self {
        let user_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("users"));
        let category_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("categories"));
        let product_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("products"));
        let sale_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("sales"));

        // Infrastructure adapters
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let sale_repository = Arc::new(SaleRepositoryPostgres::new(pool));

        let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
        let token_service: Arc<dyn TokenService> =
            Arc::new(JwtTokenService::new(&auth.jwt_secret, auth.ttl()));

        // User use cases
        let user_api = UserApi::new(
            Arc::new(SignUpUseCaseImpl {
                repository: user_repository.clone(),
                hasher: hasher.clone(),
                logger: user_logger.clone(),
            }),
            Arc::new(LogInUseCaseImpl {
                repository: user_repository.clone(),
                hasher: hasher.clone(),
                tokens: token_service.clone(),
                logger: user_logger.clone(),
            }),
            Arc::new(GetAllUsersUseCaseImpl {
                repository: user_repository.clone(),
                logger: user_logger.clone(),
            }),
            Arc::new(GetUserByIdUseCaseImpl {
                repository: user_repository.clone(),
                logger: user_logger.clone(),
            }),
            Arc::new(DeleteUserUseCaseImpl {
                repository: user_repository.clone(),
                logger: user_logger,
            }),
        );

        // Category use cases
        let category_api = CategoryApi::new(
            Arc::new(CreateCategoryUseCaseImpl {
                repository: category_repository.clone(),
                user_repository,
                hasher,
                logger: category_logger.clone(),
            }),
            Arc::new(GetAllCategoriesUseCaseImpl {
                repository: category_repository.clone(),
                logger: category_logger.clone(),
            }),
            Arc::new(GetCategoryByNameUseCaseImpl {
                repository: category_repository.clone(),
                logger: category_logger.clone(),
            }),
            Arc::new(UpdateCategoryUseCaseImpl {
                repository: category_repository.clone(),
                logger: category_logger.clone(),
            }),
            Arc::new(DeleteCategoryUseCaseImpl {
                repository: category_repository.clone(),
                logger: category_logger,
            }),
        );

        // Product use cases
        let product_api = ProductApi::new(
            Arc::new(CreateProductUseCaseImpl {
                repository: product_repository.clone(),
                category_repository: category_repository.clone(),
                logger: product_logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: product_repository.clone(),
                category_repository: category_repository.clone(),
                logger: product_logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: product_repository.clone(),
                category_repository: category_repository.clone(),
                logger: product_logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: product_repository.clone(),
                category_repository: category_repository.clone(),
                logger: product_logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                repository: product_repository.clone(),
                category_repository: category_repository.clone(),
                logger: product_logger,
            }),
        );

        // Sale use cases
        let sale_api = SaleApi::new(
            Arc::new(RecordSaleUseCaseImpl {
                repository: sale_repository.clone(),
                product_repository: product_repository.clone(),
                category_repository: category_repository.clone(),
                logger: sale_logger.clone(),
            }),
            Arc::new(GetAllSalesUseCaseImpl {
                repository: sale_repository.clone(),
                logger: sale_logger.clone(),
            }),
            Arc::new(GetSalesByProductUseCaseImpl {
                repository: sale_repository.clone(),
                product_repository,
                category_repository,
                logger: sale_logger.clone(),
            }),
            Arc::new(GetSalesSummaryUseCaseImpl {
                repository: sale_repository,
                logger: sale_logger,
            }),
        );

        Self {
            health_api: HealthApi::new(),
            user_api,
            category_api,
            product_api,
            sale_api,
            token_service,
        }
    }
}
