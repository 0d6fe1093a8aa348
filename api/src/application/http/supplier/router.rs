use super::handlers::create_supplier::{__path_create_supplier, create_supplier};
use super::handlers::delete_supplier::{__path_delete_supplier, delete_supplier};
use super::handlers::get_suppliers::{__path_get_suppliers, get_suppliers};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_suppliers, create_supplier, delete_supplier))]
pub struct SupplierApiDoc;

pub fn supplier_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/suppliers", state.args.server.root_path),
            get(get_suppliers),
        )
        .route(
            &format!("{}/suppliers", state.args.server.root_path),
            post(create_supplier),
        )
        .route(
            &format!("{}/suppliers/{{supplier_id}}", state.args.server.root_path),
            delete(delete_supplier),
        )
}
