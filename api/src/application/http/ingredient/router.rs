use super::handlers::create_ingredient::{__path_create_ingredient, create_ingredient};
use super::handlers::delete_ingredient::{__path_delete_ingredient, delete_ingredient};
use super::handlers::get_ingredients::{__path_get_ingredients, get_ingredients};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_ingredients, create_ingredient, delete_ingredient))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ingredients", state.args.server.root_path),
            get(get_ingredients),
        )
        .route(
            &format!("{}/ingredients", state.args.server.root_path),
            post(create_ingredient),
        )
        .route(
            &format!(
                "{}/ingredients/{{ingredient_id}}",
                state.args.server.root_path
            ),
            delete(delete_ingredient),
        )
}
