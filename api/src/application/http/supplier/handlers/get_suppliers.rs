use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::supplier::entities::Supplier;
use larder_core::domain::supplier::ports::SupplierService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSuppliersResponse {
    pub data: Vec<Supplier>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "supplier",
    summary = "Get suppliers",
    description = "Retrieves every supplier in the system, ordered by name.",
    responses(
        (status = 200, body = GetSuppliersResponse)
    ),
)]
pub async fn get_suppliers(
    State(state): State<AppState>,
) -> Result<Response<GetSuppliersResponse>, ApiError> {
    let suppliers = state.service.get_suppliers().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetSuppliersResponse { data: suppliers }))
}
