use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use larder_core::domain::supplier::ports::SupplierService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteSupplierResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{supplier_id}",
    tag = "supplier",
    summary = "Delete supplier",
    description = "Deletes a supplier together with every ingredient association that references it.",
    responses(
        (status = 200, body = DeleteSupplierResponse),
        (status = 404, description = "Supplier not found")
    ),
    params(
        ("supplier_id" = Uuid, Path, description = "Supplier ID"),
    ),
)]
pub async fn delete_supplier(
    Path(supplier_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteSupplierResponse>, ApiError> {
    state
        .service
        .delete_supplier(supplier_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteSupplierResponse {
        message: "Supplier deleted successfully".to_string(),
    }))
}
