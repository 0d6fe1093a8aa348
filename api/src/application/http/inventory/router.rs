use super::handlers::get_inventory::{__path_get_inventory, get_inventory};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_inventory))]
pub struct InventoryApiDoc;

pub fn inventory_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/inventory", state.args.server.root_path),
        get(get_inventory),
    )
}
