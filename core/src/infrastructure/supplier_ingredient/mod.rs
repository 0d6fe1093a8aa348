pub mod mappers;
pub mod repositories;

pub use repositories::supplier_ingredient_repository::PostgresSupplierIngredientRepository;
