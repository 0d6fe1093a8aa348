use super::handlers::create_supplier_ingredients::{
    __path_create_supplier_ingredients, create_supplier_ingredients,
};
use super::handlers::get_link_options::{__path_get_link_options, get_link_options};
use super::handlers::get_supplier_ingredients::{
    __path_get_supplier_ingredients, get_supplier_ingredients,
};
use super::handlers::record_price_list::{__path_record_price_list, record_price_list};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_supplier_ingredients,
    create_supplier_ingredients,
    record_price_list,
    get_link_options
))]
pub struct SupplierIngredientApiDoc;

pub fn supplier_ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/supplier-ingredients", state.args.server.root_path),
            get(get_supplier_ingredients),
        )
        .route(
            &format!("{}/supplier-ingredients", state.args.server.root_path),
            post(create_supplier_ingredients),
        )
        .route(
            &format!(
                "{}/supplier-ingredients/price-list",
                state.args.server.root_path
            ),
            post(record_price_list),
        )
        .route(
            &format!(
                "{}/supplier-ingredients/options",
                state.args.server.root_path
            ),
            get(get_link_options),
        )
}
