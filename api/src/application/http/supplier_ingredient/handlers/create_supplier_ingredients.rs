use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::supplier_ingredient::validators::LinkIngredientsValidator;
use axum::extract::State;
use larder_core::domain::supplier_ingredient::entities::SupplierIngredient;
use larder_core::domain::supplier_ingredient::ports::SupplierIngredientService;
use larder_core::domain::supplier_ingredient::value_objects::LinkIngredientsInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateSupplierIngredientsResponse {
    pub data: Vec<SupplierIngredient>,
}

#[utoipa::path(
    post,
    path = "",
    tag = "supplier_ingredient",
    summary = "Link ingredients to a supplier",
    description = "Creates one association per selected ingredient, without a unit cost. Selection ids that no longer resolve to an ingredient are skipped.",
    responses(
        (status = 201, body = CreateSupplierIngredientsResponse),
        (status = 404, description = "Supplier not found"),
        (status = 409, description = "A (supplier, ingredient) pair already exists")
    ),
    request_body = LinkIngredientsValidator
)]
pub async fn create_supplier_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LinkIngredientsValidator>,
) -> Result<Response<CreateSupplierIngredientsResponse>, ApiError> {
    let links = state
        .service
        .link_ingredients(LinkIngredientsInput {
            supplier_id: payload.supplier_id,
            ingredient_ids: payload.ingredient_ids,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateSupplierIngredientsResponse {
        data: links,
    }))
}
