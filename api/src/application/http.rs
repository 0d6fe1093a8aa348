pub mod health;
pub mod ingredient;
pub mod inventory;
pub mod server;
pub mod supplier;
pub mod supplier_ingredient;
