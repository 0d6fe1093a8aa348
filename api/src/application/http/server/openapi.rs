use crate::application::http::{
    ingredient::router::IngredientApiDoc, inventory::router::InventoryApiDoc,
    supplier::router::SupplierApiDoc, supplier_ingredient::router::SupplierIngredientApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Larder API"
    ),
    nest(
        (path = "/inventory", api = InventoryApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/suppliers", api = SupplierApiDoc),
        (path = "/supplier-ingredients", api = SupplierIngredientApiDoc),
    )
)]
pub struct ApiDoc;
