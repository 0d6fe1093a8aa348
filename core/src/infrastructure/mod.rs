pub mod db;
pub mod health;
pub mod ingredient;
pub mod supplier;
pub mod supplier_ingredient;
