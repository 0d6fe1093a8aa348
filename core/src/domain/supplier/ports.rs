use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    supplier::{entities::Supplier, value_objects::CreateSupplierInput},
};

pub trait SupplierService: Send + Sync {
    fn create_supplier(
        &self,
        input: CreateSupplierInput,
    ) -> impl Future<Output = Result<Supplier, CoreError>> + Send;

    fn get_suppliers(&self) -> impl Future<Output = Result<Vec<Supplier>, CoreError>> + Send;

    fn delete_supplier(
        &self,
        supplier_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SupplierRepository: Send + Sync {
    fn create(
        &self,
        supplier: Supplier,
    ) -> impl Future<Output = Result<Supplier, CoreError>> + Send;

    fn get_by_id(
        &self,
        supplier_id: Uuid,
    ) -> impl Future<Output = Result<Option<Supplier>, CoreError>> + Send;

    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Supplier>, CoreError>> + Send;

    /// All suppliers ordered by name, the order the association form shows
    /// them in.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Supplier>, CoreError>> + Send;

    fn delete(&self, supplier_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
