use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::sale::use_cases::get_all::{GetAllSalesParams, GetAllSalesUseCase};
use business::domain::sale::use_cases::get_by_product::{
    GetSalesByProductParams, GetSalesByProductUseCase,
};
use business::domain::sale::use_cases::record::{RecordSaleParams, RecordSaleUseCase};
use business::domain::sale::use_cases::summary::{GetSalesSummaryParams, GetSalesSummaryUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::sale::dto::{RecordSaleRequest, SaleResponse, SalesSummaryResponse};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct SaleApi {
    record_use_case: Arc<dyn RecordSaleUseCase>,
    get_all_use_case: Arc<dyn GetAllSalesUseCase>,
    get_by_product_use_case: Arc<dyn GetSalesByProductUseCase>,
    summary_use_case: Arc<dyn GetSalesSummaryUseCase>,
}

impl SaleApi {
    pub fn new(
        record_use_case: Arc<dyn RecordSaleUseCase>,
        get_all_use_case: Arc<dyn GetAllSalesUseCase>,
        get_by_product_use_case: Arc<dyn GetSalesByProductUseCase>,
        summary_use_case: Arc<dyn GetSalesSummaryUseCase>,
    ) -> Self {
        Self {
            record_use_case,
            get_all_use_case,
            get_by_product_use_case,
            summary_use_case,
        }
    }
}

/// Sales API
#[OpenApi]
impl SaleApi {
    /// Record a sale
    ///
    /// Takes `amount` units out of the product's stock and keeps a snapshot
    /// of its name, description and price.
    #[oai(path = "/sales", method = "post", tag = "ApiTags::Sales")]
    async fn record_sale(&self, auth: BearerAuth, body: Json<RecordSaleRequest>) -> RecordSaleResponse {
        let params = RecordSaleParams {
            user_id: auth.0,
            product_id: body.0.product_id,
            amount: body.0.amount,
        };

        match self.record_use_case.execute(params).await {
            Ok(sale) => RecordSaleResponse::Created(Json(sale.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RecordSaleResponse::BadRequest(json),
                    403 => RecordSaleResponse::Forbidden(json),
                    404 => RecordSaleResponse::NotFound(json),
                    422 => RecordSaleResponse::UnprocessableEntity(json),
                    _ => RecordSaleResponse::InternalError(json),
                }
            }
        }
    }

    /// List the caller's sales, newest first
    #[oai(path = "/sales", method = "get", tag = "ApiTags::Sales")]
    async fn get_all_sales(&self, auth: BearerAuth) -> GetSalesResponse {
        match self
            .get_all_use_case
            .execute(GetAllSalesParams { user_id: auth.0 })
            .await
        {
            Ok(sales) => GetSalesResponse::Ok(Json(sales.into_iter().map(Into::into).collect())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetSalesResponse::InternalError(json)
            }
        }
    }

    /// Totals over the caller's sales
    #[oai(path = "/sales/summary", method = "get", tag = "ApiTags::Sales")]
    async fn get_sales_summary(&self, auth: BearerAuth) -> GetSalesSummaryResponse {
        match self
            .summary_use_case
            .execute(GetSalesSummaryParams { user_id: auth.0 })
            .await
        {
            Ok(summary) => GetSalesSummaryResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetSalesSummaryResponse::InternalError(json)
            }
        }
    }

    /// List the sales of one product
    #[oai(path = "/products/:id/sales", method = "get", tag = "ApiTags::Sales")]
    async fn get_sales_by_product(
        &self,
        auth: BearerAuth,
        id: Path<String>,
    ) -> GetSalesByProductResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetSalesByProductResponse::BadRequest(invalid_id("product.invalid_id"));
        };

        match self
            .get_by_product_use_case
            .execute(GetSalesByProductParams {
                user_id: auth.0,
                product_id: uuid,
            })
            .await
        {
            Ok(sales) => {
                GetSalesByProductResponse::Ok(Json(sales.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => GetSalesByProductResponse::Forbidden(json),
                    404 => GetSalesByProductResponse::NotFound(json),
                    _ => GetSalesByProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecordSaleResponse {
    #[oai(status = 201)]
    Created(Json<SaleResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSalesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<SaleResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSalesSummaryResponse {
    #[oai(status = 200)]
    Ok(Json<SalesSummaryResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSalesByProductResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<SaleResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
