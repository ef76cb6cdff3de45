use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};
use business::domain::user::use_cases::get_all::GetAllUsersUseCase;
use business::domain::user::use_cases::get_by_id::{GetUserByIdParams, GetUserByIdUseCase};
use business::domain::user::use_cases::log_in::{LogInParams, LogInUseCase};
use business::domain::user::use_cases::sign_up::{SignUpParams, SignUpUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;
use crate::api::user::dto::{LogInRequest, SessionResponse, SignUpRequest, UserResponse};

pub struct UserApi {
    sign_up_use_case: Arc<dyn SignUpUseCase>,
    log_in_use_case: Arc<dyn LogInUseCase>,
    get_all_use_case: Arc<dyn GetAllUsersUseCase>,
    get_by_id_use_case: Arc<dyn GetUserByIdUseCase>,
    delete_use_case: Arc<dyn DeleteUserUseCase>,
}

impl UserApi {
    pub fn new(
        sign_up_use_case: Arc<dyn SignUpUseCase>,
        log_in_use_case: Arc<dyn LogInUseCase>,
        get_all_use_case: Arc<dyn GetAllUsersUseCase>,
        get_by_id_use_case: Arc<dyn GetUserByIdUseCase>,
        delete_use_case: Arc<dyn DeleteUserUseCase>,
    ) -> Self {
        Self {
            sign_up_use_case,
            log_in_use_case,
            get_all_use_case,
            get_by_id_use_case,
            delete_use_case,
        }
    }
}

/// User accounts and sessions
#[OpenApi]
impl UserApi {
    /// Register a new user
    ///
    /// The password is stored as a salted hash.
    #[oai(path = "/users/sign-up", method = "post", tag = "ApiTags::Users")]
    async fn sign_up(&self, body: Json<SignUpRequest>) -> SignUpResponse {
        let params = SignUpParams {
            email: body.0.email,
            password: body.0.password,
            first_name: body.0.first_name,
            last_name: body.0.last_name,
        };

        match self.sign_up_use_case.execute(params).await {
            Ok(user) => SignUpResponse::Created(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SignUpResponse::BadRequest(json),
                    409 => SignUpResponse::Conflict(json),
                    _ => SignUpResponse::InternalError(json),
                }
            }
        }
    }

    /// Log in
    ///
    /// Checks the credentials and returns a bearer token for the other endpoints.
    #[oai(path = "/users/login", method = "post", tag = "ApiTags::Users")]
    async fn log_in(&self, body: Json<LogInRequest>) -> LogInResponse {
        let params = LogInParams {
            email: body.0.email,
            password: body.0.password,
        };

        match self.log_in_use_case.execute(params).await {
            Ok(session) => LogInResponse::Ok(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LogInResponse::Unauthorized(json),
                    404 => LogInResponse::NotFound(json),
                    _ => LogInResponse::InternalError(json),
                }
            }
        }
    }

    /// List all users
    #[oai(path = "/users", method = "get", tag = "ApiTags::Users")]
    async fn get_all_users(&self, _auth: BearerAuth) -> GetAllUsersResponse {
        match self.get_all_use_case.execute().await {
            Ok(users) => GetAllUsersResponse::Ok(Json(users.into_iter().map(Into::into).collect())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllUsersResponse::InternalError(json)
            }
        }
    }

    /// Get the authenticated user
    #[oai(path = "/users/me", method = "get", tag = "ApiTags::Users")]
    async fn get_current_user(&self, auth: BearerAuth) -> GetCurrentUserResponse {
        match self
            .get_by_id_use_case
            .execute(GetUserByIdParams { user_id: auth.0 })
            .await
        {
            Ok(user) => GetCurrentUserResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCurrentUserResponse::NotFound(json),
                    _ => GetCurrentUserResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete the authenticated user
    ///
    /// Removes the account together with its categories, products and sales.
    #[oai(path = "/users/me", method = "delete", tag = "ApiTags::Users")]
    async fn delete_current_user(&self, auth: BearerAuth) -> DeleteUserResponse {
        match self
            .delete_use_case
            .execute(DeleteUserParams { user_id: auth.0 })
            .await
        {
            Ok(()) => DeleteUserResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteUserResponse::NotFound(json),
                    _ => DeleteUserResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SignUpResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LogInResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllUsersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCurrentUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteUserResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
