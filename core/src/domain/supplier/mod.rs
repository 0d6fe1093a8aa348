pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::Supplier;
pub use ports::{SupplierRepository, SupplierService};
