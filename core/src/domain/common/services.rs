use crate::domain::{
    health::ports::HealthCheckRepository, ingredient::ports::IngredientRepository,
    supplier::ports::SupplierRepository,
    supplier_ingredient::ports::SupplierIngredientRepository,
};

/// Container for every repository the domain services run against. The
/// service trait impls live next to their domain (`domain::*::services`).
#[derive(Clone)]
pub struct Service<I, S, L, H>
where
    I: IngredientRepository,
    S: SupplierRepository,
    L: SupplierIngredientRepository,
    H: HealthCheckRepository,
{
    pub ingredient_repository: I,
    pub supplier_repository: S,
    pub supplier_ingredient_repository: L,
    pub health_check_repository: H,
}

impl<I, S, L, H> Service<I, S, L, H>
where
    I: IngredientRepository,
    S: SupplierRepository,
    L: SupplierIngredientRepository,
    H: HealthCheckRepository,
{
    pub fn new(
        ingredient_repository: I,
        supplier_repository: S,
        supplier_ingredient_repository: L,
        health_check_repository: H,
    ) -> Self {
        Self {
            ingredient_repository,
            supplier_repository,
            supplier_ingredient_repository,
            health_check_repository,
        }
    }
}
