use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_by_name::{
    GetCategoryByNameParams, GetCategoryByNameUseCase,
};
use crate::domain::logger::Logger;

pub struct GetCategoryByNameUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoryByNameUseCase for GetCategoryByNameUseCaseImpl {
    async fn execute(&self, params: GetCategoryByNameParams) -> Result<Category, CategoryError> {
        self.logger
            .debug(&format!("Looking up category: {}", params.name));

        // Someone else's category is reported exactly like a missing one.
        self.repository
            .find_by_name(params.name.trim())
            .await?
            .filter(|c| c.is_owned_by(&params.user_id))
            .ok_or(CategoryError::NotFound)
    }
}
