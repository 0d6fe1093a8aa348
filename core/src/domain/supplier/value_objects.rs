use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSupplierInput {
    pub name: String,
    pub phone_no: String,
    pub email: Option<String>,
}
