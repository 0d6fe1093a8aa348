use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::ingredient::entities::Ingredient;
use larder_core::domain::ingredient::ports::IngredientService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientsResponse {
    pub data: Vec<Ingredient>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "ingredient",
    summary = "Get ingredients",
    description = "Retrieves every ingredient in the system.",
    responses(
        (status = 200, body = GetIngredientsResponse)
    ),
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
) -> Result<Response<GetIngredientsResponse>, ApiError> {
    let ingredients = state.service.get_ingredients().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetIngredientsResponse { data: ingredients }))
}
