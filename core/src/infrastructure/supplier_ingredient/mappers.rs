use chrono::Utc;

use crate::domain::supplier_ingredient::entities::SupplierIngredient;
use crate::entity::supplier_ingredients::Model as SupplierIngredientModel;

impl From<SupplierIngredientModel> for SupplierIngredient {
    fn from(model: SupplierIngredientModel) -> Self {
        SupplierIngredient {
            id: model.id,
            supplier_id: model.supplier_id,
            ingredient_id: model.ingredient_id,
            unit_cost: model.unit_cost,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<&SupplierIngredientModel> for SupplierIngredient {
    fn from(model: &SupplierIngredientModel) -> Self {
        SupplierIngredient {
            id: model.id,
            supplier_id: model.supplier_id,
            ingredient_id: model.ingredient_id,
            unit_cost: model.unit_cost,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
