use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// "This supplier can provide this ingredient", optionally at a unit cost.
/// Each (supplier, ingredient) pair is unique; the storage layer enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SupplierIngredient {
    pub id: Uuid,
    pub supplier_id: Uuid,
    pub ingredient_id: Uuid,
    pub unit_cost: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SupplierIngredient {
    pub fn new(supplier_id: Uuid, ingredient_id: Uuid, unit_cost: Option<i32>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            supplier_id,
            ingredient_id,
            unit_cost,
            created_at: now,
            updated_at: now,
        }
    }
}
