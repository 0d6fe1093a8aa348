use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::supplier_ingredient::ports::SupplierIngredientService;
use larder_core::domain::supplier_ingredient::value_objects::LinkOptions;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetLinkOptionsResponse {
    pub data: LinkOptions,
}

#[utoipa::path(
    get,
    path = "/options",
    tag = "supplier_ingredient",
    summary = "Get link options",
    description = "Retrieves the current suppliers and ingredients for populating the association form.",
    responses(
        (status = 200, body = GetLinkOptionsResponse)
    ),
)]
pub async fn get_link_options(
    State(state): State<AppState>,
) -> Result<Response<GetLinkOptionsResponse>, ApiError> {
    let options = state.service.get_link_options().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetLinkOptionsResponse { data: options }))
}
