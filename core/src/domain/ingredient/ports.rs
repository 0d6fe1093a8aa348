use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{entities::Ingredient, value_objects::CreateIngredientInput},
};

pub trait IngredientService: Send + Sync {
    fn create_ingredient(
        &self,
        input: CreateIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn get_ingredients(&self) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn delete_ingredient(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    fn create(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn get_by_id(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn delete(&self, ingredient_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
