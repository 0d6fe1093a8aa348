use crate::application::http::ingredient::validators::CreateIngredientValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::ingredient::entities::Ingredient;
use larder_core::domain::ingredient::ports::IngredientService;
use larder_core::domain::ingredient::value_objects::CreateIngredientInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    post,
    path = "",
    tag = "ingredient",
    summary = "Create ingredient",
    description = "Creates a new ingredient. The name must be unique across all ingredients.",
    responses(
        (status = 201, body = CreateIngredientResponse),
        (status = 409, description = "An ingredient with this name already exists"),
        (status = 422, description = "Required field missing")
    ),
    request_body = CreateIngredientValidator
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateIngredientValidator>,
) -> Result<Response<CreateIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .create_ingredient(CreateIngredientInput {
            name: payload.name,
            unit_of_measurement: payload.unit_of_measurement,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateIngredientResponse {
        data: ingredient,
    }))
}
