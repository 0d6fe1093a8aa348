use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::supplier::validators::CreateSupplierValidator;
use axum::extract::State;
use larder_core::domain::supplier::entities::Supplier;
use larder_core::domain::supplier::ports::SupplierService;
use larder_core::domain::supplier::value_objects::CreateSupplierInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateSupplierResponse {
    pub data: Supplier,
}

#[utoipa::path(
    post,
    path = "",
    tag = "supplier",
    summary = "Create supplier",
    description = "Creates a new supplier. The name must be unique across all suppliers.",
    responses(
        (status = 201, body = CreateSupplierResponse),
        (status = 409, description = "A supplier with this name already exists"),
        (status = 422, description = "Required field missing")
    ),
    request_body = CreateSupplierValidator
)]
pub async fn create_supplier(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateSupplierValidator>,
) -> Result<Response<CreateSupplierResponse>, ApiError> {
    let supplier = state
        .service
        .create_supplier(CreateSupplierInput {
            name: payload.name,
            phone_no: payload.phone_no,
            email: payload.email,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateSupplierResponse { data: supplier }))
}
