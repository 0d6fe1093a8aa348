use axum::extract::State;
use larder_core::domain::ingredient::entities::Ingredient;
use larder_core::domain::ingredient::ports::IngredientService;
use larder_core::domain::supplier::entities::Supplier;
use larder_core::domain::supplier::ports::SupplierService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetInventoryResponse {
    pub ingredients: Vec<Ingredient>,
    pub suppliers: Vec<Supplier>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "inventory",
    summary = "Get inventory",
    description = "Retrieves every ingredient and every supplier for the landing listing.",
    responses(
        (status = 200, body = GetInventoryResponse)
    ),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
) -> Result<Response<GetInventoryResponse>, ApiError> {
    let ingredients = state.service.get_ingredients().await.map_err(ApiError::from)?;
    let suppliers = state.service.get_suppliers().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetInventoryResponse {
        ingredients,
        suppliers,
    }))
}
