use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::supplier_ingredient::entities::SupplierIngredient;
use larder_core::domain::supplier_ingredient::ports::SupplierIngredientService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSupplierIngredientsResponse {
    pub data: Vec<SupplierIngredient>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "supplier_ingredient",
    summary = "Get supplier ingredients",
    description = "Retrieves every supplier/ingredient association.",
    responses(
        (status = 200, body = GetSupplierIngredientsResponse)
    ),
)]
pub async fn get_supplier_ingredients(
    State(state): State<AppState>,
) -> Result<Response<GetSupplierIngredientsResponse>, ApiError> {
    let links = state
        .service
        .get_supplier_ingredients()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSupplierIngredientsResponse { data: links }))
}
