pub mod create_supplier;
pub mod delete_supplier;
pub mod get_suppliers;
