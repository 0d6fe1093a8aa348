pub mod ingredients;
pub mod supplier_ingredients;
pub mod suppliers;
