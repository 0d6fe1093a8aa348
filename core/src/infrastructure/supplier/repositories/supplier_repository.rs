use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, SqlErr};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    supplier::{entities::Supplier, ports::SupplierRepository},
};
use crate::entity::suppliers::{
    ActiveModel as SupplierActiveModel, Column as SupplierColumn, Entity as SupplierEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresSupplierRepository {
    pub db: DatabaseConnection,
}

impl PostgresSupplierRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SupplierRepository for PostgresSupplierRepository {
    async fn create(&self, supplier: Supplier) -> Result<Supplier, CoreError> {
        let name = supplier.name.clone();

        let created = SupplierEntity::insert(SupplierActiveModel {
            id: Set(supplier.id),
            name: Set(supplier.name),
            phone_no: Set(supplier.phone_no),
            email: Set(supplier.email),
            created_at: Set(supplier.created_at.fixed_offset()),
            updated_at: Set(supplier.updated_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                CoreError::AlreadyExists(format!("supplier '{name}'"))
            }
            _ => {
                error!("Failed to create supplier: {}", e);
                CoreError::InternalServerError
            }
        })?;

        Ok(Supplier::from(created))
    }

    async fn get_by_id(&self, supplier_id: Uuid) -> Result<Option<Supplier>, CoreError> {
        let supplier = SupplierEntity::find_by_id(supplier_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get supplier by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Supplier::from);

        Ok(supplier)
    }

    async fn get_by_name(&self, name: String) -> Result<Option<Supplier>, CoreError> {
        let supplier = SupplierEntity::find()
            .filter(SupplierColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get supplier by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(Supplier::from);

        Ok(supplier)
    }

    async fn fetch_all(&self) -> Result<Vec<Supplier>, CoreError> {
        let suppliers = SupplierEntity::find()
            .order_by_asc(SupplierColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch suppliers: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Supplier::from)
            .collect::<Vec<Supplier>>();

        Ok(suppliers)
    }

    async fn delete(&self, supplier_id: Uuid) -> Result<(), CoreError> {
        let result = SupplierEntity::delete_by_id(supplier_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete supplier: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::SupplierNotFound);
        }

        Ok(())
    }
}
