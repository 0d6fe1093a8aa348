use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Supplier not found")]
    SupplierNotFound,

    #[error("Ingredient not found")]
    IngredientNotFound,

    #[error("Not found")]
    NotFound,

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("Internal server error")]
    InternalServerError,
}
