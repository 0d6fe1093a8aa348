use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{entities::Ingredient, ports::IngredientRepository},
};
use crate::entity::ingredients::{
    ActiveModel as IngredientActiveModel, Column as IngredientColumn, Entity as IngredientEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn create(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let name = ingredient.name.clone();

        let created = IngredientEntity::insert(IngredientActiveModel {
            id: Set(ingredient.id),
            name: Set(ingredient.name),
            unit_of_measurement: Set(ingredient.unit_of_measurement),
            created_at: Set(ingredient.created_at.fixed_offset()),
            updated_at: Set(ingredient.updated_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                CoreError::AlreadyExists(format!("ingredient '{name}'"))
            }
            _ => {
                error!("Failed to create ingredient: {}", e);
                CoreError::InternalServerError
            }
        })?;

        Ok(Ingredient::from(created))
    }

    async fn get_by_id(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = IngredientEntity::find_by_id(ingredient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Ingredient::from);

        Ok(ingredient)
    }

    async fn get_by_name(&self, name: String) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = IngredientEntity::find()
            .filter(IngredientColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(Ingredient::from);

        Ok(ingredient)
    }

    async fn fetch_all(&self) -> Result<Vec<Ingredient>, CoreError> {
        let ingredients = IngredientEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ingredients: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Ingredient::from)
            .collect::<Vec<Ingredient>>();

        Ok(ingredients)
    }

    async fn delete(&self, ingredient_id: Uuid) -> Result<(), CoreError> {
        let result = IngredientEntity::delete_by_id(ingredient_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::IngredientNotFound);
        }

        Ok(())
    }
}
