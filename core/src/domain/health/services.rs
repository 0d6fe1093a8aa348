use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    ingredient::ports::IngredientRepository,
    supplier::ports::SupplierRepository,
    supplier_ingredient::ports::SupplierIngredientRepository,
};

impl<I, S, L, H> HealthCheckService for Service<I, S, L, H>
where
    I: IngredientRepository,
    S: SupplierRepository,
    L: SupplierIngredientRepository,
    H: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
