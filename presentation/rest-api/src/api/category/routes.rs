use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use business::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use business::domain::category::use_cases::get_all::{
    GetAllCategoriesParams, GetAllCategoriesUseCase,
};
use business::domain::category::use_cases::get_by_name::{
    GetCategoryByNameParams, GetCategoryByNameUseCase,
};
use business::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};

use crate::api::category::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    create_use_case: Arc<dyn CreateCategoryUseCase>,
    get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
    get_by_name_use_case: Arc<dyn GetCategoryByNameUseCase>,
    update_use_case: Arc<dyn UpdateCategoryUseCase>,
    delete_use_case: Arc<dyn DeleteCategoryUseCase>,
}

impl CategoryApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCategoryUseCase>,
        get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
        get_by_name_use_case: Arc<dyn GetCategoryByNameUseCase>,
        update_use_case: Arc<dyn UpdateCategoryUseCase>,
        delete_use_case: Arc<dyn DeleteCategoryUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_name_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Category management API
///
/// Categories group products and belong to the user who created them.
#[OpenApi]
impl CategoryApi {
    /// Create a category
    ///
    /// The owner's email and password are checked the same way as a login.
    #[oai(path = "/categories", method = "post", tag = "ApiTags::Categories")]
    async fn create_category(&self, body: Json<CreateCategoryRequest>) -> CreateCategoryResponse {
        let params = CreateCategoryParams {
            name: body.0.name,
            owner_email: body.0.email,
            owner_password: body.0.password,
        };

        match self.create_use_case.execute(params).await {
            Ok(category) => CreateCategoryResponse::Created(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCategoryResponse::BadRequest(json),
                    401 => CreateCategoryResponse::Unauthorized(json),
                    404 => CreateCategoryResponse::NotFound(json),
                    409 => CreateCategoryResponse::Conflict(json),
                    _ => CreateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// List the caller's categories
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn get_all_categories(&self, auth: BearerAuth) -> GetAllCategoriesResponse {
        match self
            .get_all_use_case
            .execute(GetAllCategoriesParams { user_id: auth.0 })
            .await
        {
            Ok(categories) => {
                GetAllCategoriesResponse::Ok(Json(categories.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllCategoriesResponse::InternalError(json)
            }
        }
    }

    /// Find one of the caller's categories by name
    #[oai(
        path = "/categories/by-name/:name",
        method = "get",
        tag = "ApiTags::Categories"
    )]
    async fn get_category_by_name(
        &self,
        auth: BearerAuth,
        name: Path<String>,
    ) -> GetCategoryByNameResponse {
        let params = GetCategoryByNameParams {
            name: name.0,
            user_id: auth.0,
        };

        match self.get_by_name_use_case.execute(params).await {
            Ok(category) => GetCategoryByNameResponse::Ok(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCategoryByNameResponse::NotFound(json),
                    _ => GetCategoryByNameResponse::InternalError(json),
                }
            }
        }
    }

    /// Rename a category
    #[oai(path = "/categories/:id", method = "put", tag = "ApiTags::Categories")]
    async fn update_category(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<UpdateCategoryRequest>,
    ) -> UpdateCategoryResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return UpdateCategoryResponse::BadRequest(invalid_id("category.invalid_id"));
        };

        let params = UpdateCategoryParams {
            id: uuid,
            user_id: auth.0,
            name: body.0.name,
        };

        match self.update_use_case.execute(params).await {
            Ok(category) => UpdateCategoryResponse::Ok(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCategoryResponse::BadRequest(json),
                    403 => UpdateCategoryResponse::Forbidden(json),
                    404 => UpdateCategoryResponse::NotFound(json),
                    409 => UpdateCategoryResponse::Conflict(json),
                    _ => UpdateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a category
    ///
    /// Products in the category are deleted with it.
    #[oai(path = "/categories/:id", method = "delete", tag = "ApiTags::Categories")]
    async fn delete_category(&self, auth: BearerAuth, id: Path<String>) -> DeleteCategoryResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteCategoryResponse::BadRequest(invalid_id("category.invalid_id"));
        };

        match self
            .delete_use_case
            .execute(DeleteCategoryParams {
                id: uuid,
                user_id: auth.0,
            })
            .await
        {
            Ok(()) => DeleteCategoryResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteCategoryResponse::Forbidden(json),
                    404 => DeleteCategoryResponse::NotFound(json),
                    _ => DeleteCategoryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCategoryResponse {
    #[oai(status = 201)]
    Created(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoryByNameResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCategoryResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
