use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::supplier_ingredient::validators::PriceListValidator;
use axum::extract::State;
use larder_core::domain::supplier_ingredient::ports::SupplierIngredientService;
use larder_core::domain::supplier_ingredient::value_objects::PriceListInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PriceListResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/price-list",
    tag = "supplier_ingredient",
    summary = "Record a supplier price list",
    description = "Creates one priced association per payload key that resolves to an existing ingredient; keys that do not resolve are skipped silently.",
    responses(
        (status = 201, body = PriceListResponse),
        (status = 404, description = "Supplier not found"),
        (status = 409, description = "A (supplier, ingredient) pair already exists")
    ),
    request_body = PriceListValidator
)]
pub async fn record_price_list(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PriceListValidator>,
) -> Result<Response<PriceListResponse>, ApiError> {
    state
        .service
        .record_price_list(PriceListInput {
            supplier: payload.supplier,
            unit_costs: payload.unit_costs,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(PriceListResponse {
        message: "pk".to_string(),
    }))
}
