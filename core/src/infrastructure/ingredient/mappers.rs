use chrono::Utc;

use crate::domain::ingredient::entities::Ingredient;
use crate::entity::ingredients::Model as IngredientModel;

impl From<IngredientModel> for Ingredient {
    fn from(model: IngredientModel) -> Self {
        Ingredient {
            id: model.id,
            name: model.name,
            unit_of_measurement: model.unit_of_measurement,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<&IngredientModel> for Ingredient {
    fn from(model: &IngredientModel) -> Self {
        Ingredient {
            id: model.id,
            name: model.name.clone(),
            unit_of_measurement: model.unit_of_measurement.clone(),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
