use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateIngredientInput {
    pub name: String,
    pub unit_of_measurement: Option<String>,
}
