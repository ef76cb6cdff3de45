use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_all::{
    GetAllCategoriesParams, GetAllCategoriesUseCase,
};
use crate::domain::logger::Logger;

pub struct GetAllCategoriesUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCategoriesUseCase for GetAllCategoriesUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllCategoriesParams,
    ) -> Result<Vec<Category>, CategoryError> {
        self.logger
            .debug(&format!("Listing categories of user: {}", params.user_id));
        let categories = self.repository.get_all_by_owner(&params.user_id).await?;
        Ok(categories)
    }
}
