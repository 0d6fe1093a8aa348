use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// A stock item the kitchen tracks. The unit cost deliberately does not live
/// here: pricing is supplier-specific and belongs on the association record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub unit_of_measurement: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ingredient {
    pub fn new(name: String, unit_of_measurement: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        // updated_at mirrors created_at; ingredients are never edited in place
        Self {
            id: Uuid::new_v7(timestamp),
            name,
            unit_of_measurement,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ingredient_keeps_updated_at_in_sync_with_created_at() {
        let ingredient = Ingredient::new("Flour".to_string(), Some("kg".to_string()));

        assert_eq!(ingredient.created_at, ingredient.updated_at);
        assert_eq!(ingredient.name, "Flour");
        assert_eq!(ingredient.unit_of_measurement.as_deref(), Some("kg"));
    }
}
