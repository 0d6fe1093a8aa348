use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LinkIngredientsValidator {
    pub supplier_id: Uuid,

    #[serde(default)]
    pub ingredient_ids: Vec<Uuid>,
}

/// The price-list wire shape is `{"supplier": <name>, <ingredient_name>:
/// <unit_cost>, ...}`: one named field plus every remaining key flattened
/// into the cost map, so non-integer costs are rejected at deserialization.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct PriceListValidator {
    #[validate(length(min = 1, message = "supplier is required"))]
    pub supplier: String,

    #[serde(flatten)]
    pub unit_costs: HashMap<String, i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_list_captures_every_non_supplier_key() {
        let payload: PriceListValidator = serde_json::from_value(serde_json::json!({
            "supplier": "Acme",
            "Flour": 10,
            "Sugar": 5
        }))
        .unwrap();

        assert_eq!(payload.supplier, "Acme");
        assert_eq!(payload.unit_costs.len(), 2);
        assert_eq!(payload.unit_costs.get("Flour"), Some(&10));
        assert_eq!(payload.unit_costs.get("Sugar"), Some(&5));
        assert!(!payload.unit_costs.contains_key("supplier"));
    }

    #[test]
    fn price_list_rejects_non_integer_costs() {
        let result = serde_json::from_value::<PriceListValidator>(serde_json::json!({
            "supplier": "Acme",
            "Flour": "ten"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn price_list_requires_a_supplier_name() {
        let payload: PriceListValidator = serde_json::from_value(serde_json::json!({
            "supplier": "",
            "Flour": 10
        }))
        .unwrap();

        assert!(payload.validate().is_err());
    }

    #[test]
    fn selection_defaults_to_an_empty_ingredient_list() {
        let payload: LinkIngredientsValidator = serde_json::from_value(serde_json::json!({
            "supplier_id": "018f4a9e-0000-7000-8000-000000000000"
        }))
        .unwrap();

        assert!(payload.ingredient_ids.is_empty());
    }
}
