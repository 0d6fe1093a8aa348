use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    supplier_ingredient::{
        entities::SupplierIngredient,
        value_objects::{LinkIngredientsInput, LinkOptions, PriceListInput},
    },
};

pub trait SupplierIngredientService: Send + Sync {
    /// Selection-list mode: create one cost-less link per selected
    /// ingredient.
    fn link_ingredients(
        &self,
        input: LinkIngredientsInput,
    ) -> impl Future<Output = Result<Vec<SupplierIngredient>, CoreError>> + Send;

    /// Keyed-payload mode: create one priced link per resolvable ingredient
    /// name.
    fn record_price_list(
        &self,
        input: PriceListInput,
    ) -> impl Future<Output = Result<Vec<SupplierIngredient>, CoreError>> + Send;

    fn get_supplier_ingredients(
        &self,
    ) -> impl Future<Output = Result<Vec<SupplierIngredient>, CoreError>> + Send;

    fn get_link_options(&self) -> impl Future<Output = Result<LinkOptions, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SupplierIngredientRepository: Send + Sync {
    /// Persists the whole batch in one transaction; either every link lands
    /// or none do.
    fn create_links(
        &self,
        links: Vec<SupplierIngredient>,
    ) -> impl Future<Output = Result<Vec<SupplierIngredient>, CoreError>> + Send;

    fn fetch_all(&self) -> impl Future<Output = Result<Vec<SupplierIngredient>, CoreError>> + Send;
}
