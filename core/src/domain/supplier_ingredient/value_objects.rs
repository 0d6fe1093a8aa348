use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{ingredient::entities::Ingredient, supplier::entities::Supplier};

/// Selection-list mode: a supplier plus the ingredient ids ticked on the
/// association form. No per-ingredient cost in this mode.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LinkIngredientsInput {
    pub supplier_id: Uuid,
    pub ingredient_ids: Vec<Uuid>,
}

/// Keyed-payload mode: a supplier name plus a price per ingredient name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PriceListInput {
    pub supplier: String,
    pub unit_costs: HashMap<String, i32>,
}

/// Everything the association form needs to render its two selection
/// controls.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LinkOptions {
    pub suppliers: Vec<Supplier>,
    pub ingredients: Vec<Ingredient>,
}
