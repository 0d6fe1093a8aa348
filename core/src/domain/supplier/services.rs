use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    supplier::{
        entities::Supplier,
        ports::{SupplierRepository, SupplierService},
        value_objects::CreateSupplierInput,
    },
    supplier_ingredient::ports::SupplierIngredientRepository,
};

impl<I, S, L, H> SupplierService for Service<I, S, L, H>
where
    I: IngredientRepository,
    S: SupplierRepository,
    L: SupplierIngredientRepository,
    H: HealthCheckRepository,
{
    async fn create_supplier(&self, input: CreateSupplierInput) -> Result<Supplier, CoreError> {
        let email = input.email.filter(|e| !e.trim().is_empty());

        let supplier = Supplier::new(input.name, input.phone_no, email);

        self.supplier_repository.create(supplier).await
    }

    async fn get_suppliers(&self) -> Result<Vec<Supplier>, CoreError> {
        self.supplier_repository.fetch_all().await
    }

    async fn delete_supplier(&self, supplier_id: Uuid) -> Result<(), CoreError> {
        self.supplier_repository
            .get_by_id(supplier_id)
            .await?
            .ok_or(CoreError::SupplierNotFound)?;

        self.supplier_repository.delete(supplier_id).await
    }
}
