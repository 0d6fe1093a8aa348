use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, EntityTrait, SqlErr, TransactionTrait};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    supplier_ingredient::{entities::SupplierIngredient, ports::SupplierIngredientRepository},
};
use crate::entity::supplier_ingredients::{
    ActiveModel as SupplierIngredientActiveModel, Entity as SupplierIngredientEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresSupplierIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresSupplierIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SupplierIngredientRepository for PostgresSupplierIngredientRepository {
    async fn create_links(
        &self,
        links: Vec<SupplierIngredient>,
    ) -> Result<Vec<SupplierIngredient>, CoreError> {
        if links.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let mut created = Vec::with_capacity(links.len());
        for link in links {
            // Any failure drops the transaction and rolls back the whole
            // batch, including a duplicate (supplier, ingredient) pair
            let model = SupplierIngredientEntity::insert(SupplierIngredientActiveModel {
                id: Set(link.id),
                supplier_id: Set(link.supplier_id),
                ingredient_id: Set(link.ingredient_id),
                unit_cost: Set(link.unit_cost),
                created_at: Set(link.created_at.fixed_offset()),
                updated_at: Set(link.updated_at.fixed_offset()),
            })
            .exec_with_returning(&txn)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    CoreError::AlreadyExists("supplier ingredient".to_string())
                }
                _ => {
                    error!("Failed to create supplier ingredient: {}", e);
                    CoreError::InternalServerError
                }
            })?;

            created.push(SupplierIngredient::from(model));
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit supplier ingredients: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn fetch_all(&self) -> Result<Vec<SupplierIngredient>, CoreError> {
        let links = SupplierIngredientEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch supplier ingredients: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(SupplierIngredient::from)
            .collect::<Vec<SupplierIngredient>>();

        Ok(links)
    }
}
