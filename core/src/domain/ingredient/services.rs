use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::{
        entities::Ingredient,
        ports::{IngredientRepository, IngredientService},
        value_objects::CreateIngredientInput,
    },
    supplier::ports::SupplierRepository,
    supplier_ingredient::ports::SupplierIngredientRepository,
};

impl<I, S, L, H> IngredientService for Service<I, S, L, H>
where
    I: IngredientRepository,
    S: SupplierRepository,
    L: SupplierIngredientRepository,
    H: HealthCheckRepository,
{
    async fn create_ingredient(
        &self,
        input: CreateIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        // Blank measurement from a form submit means "not provided"
        let unit_of_measurement = input.unit_of_measurement.filter(|u| !u.trim().is_empty());

        let ingredient = Ingredient::new(input.name, unit_of_measurement);

        self.ingredient_repository.create(ingredient).await
    }

    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, CoreError> {
        self.ingredient_repository.fetch_all().await
    }

    async fn delete_ingredient(&self, ingredient_id: Uuid) -> Result<(), CoreError> {
        self.ingredient_repository
            .get_by_id(ingredient_id)
            .await?
            .ok_or(CoreError::IngredientNotFound)?;

        // supplier_ingredients rows referencing this ingredient go with it
        // via the cascade on the foreign key
        self.ingredient_repository.delete(ingredient_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use uuid::Uuid;

    use crate::domain::common::entities::app_errors::CoreError;
    use crate::domain::common::services::Service;
    use crate::domain::health::ports::MockHealthCheckRepository;
    use crate::domain::ingredient::entities::Ingredient;
    use crate::domain::ingredient::ports::{IngredientService, MockIngredientRepository};
    use crate::domain::ingredient::value_objects::CreateIngredientInput;
    use crate::domain::supplier::ports::MockSupplierRepository;
    use crate::domain::supplier_ingredient::ports::MockSupplierIngredientRepository;

    fn service(
        ingredient_repository: MockIngredientRepository,
    ) -> Service<
        MockIngredientRepository,
        MockSupplierRepository,
        MockSupplierIngredientRepository,
        MockHealthCheckRepository,
    > {
        Service::new(
            ingredient_repository,
            MockSupplierRepository::new(),
            MockSupplierIngredientRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    #[tokio::test]
    async fn create_ingredient_persists_submitted_fields() {
        let mut ingredient_repository = MockIngredientRepository::new();
        ingredient_repository
            .expect_create()
            .withf(|i| i.name == "Flour" && i.unit_of_measurement.as_deref() == Some("kg"))
            .returning(|ingredient| Box::pin(async move { Ok(ingredient) }));

        let created = service(ingredient_repository)
            .create_ingredient(CreateIngredientInput {
                name: "Flour".to_string(),
                unit_of_measurement: Some("kg".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(created.name, "Flour");
    }

    #[tokio::test]
    async fn create_ingredient_treats_blank_measurement_as_missing() {
        let mut ingredient_repository = MockIngredientRepository::new();
        ingredient_repository
            .expect_create()
            .withf(|i| i.unit_of_measurement.is_none())
            .returning(|ingredient| Box::pin(async move { Ok(ingredient) }));

        service(ingredient_repository)
            .create_ingredient(CreateIngredientInput {
                name: "Sugar".to_string(),
                unit_of_measurement: Some("   ".to_string()),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn create_ingredient_surfaces_duplicate_name_conflict() {
        let mut ingredient_repository = MockIngredientRepository::new();
        ingredient_repository.expect_create().returning(|_| {
            Box::pin(async { Err(CoreError::AlreadyExists("ingredient 'Flour'".to_string())) })
        });

        let result = service(ingredient_repository)
            .create_ingredient(CreateIngredientInput {
                name: "Flour".to_string(),
                unit_of_measurement: None,
            })
            .await;

        assert_eq!(
            result,
            Err(CoreError::AlreadyExists("ingredient 'Flour'".to_string()))
        );
    }

    #[tokio::test]
    async fn get_ingredients_returns_every_record() {
        let flour = Ingredient::new("Flour".to_string(), None);
        let sugar = Ingredient::new("Sugar".to_string(), Some("g".to_string()));

        let mut ingredient_repository = MockIngredientRepository::new();
        let all = vec![flour.clone(), sugar.clone()];
        ingredient_repository.expect_fetch_all().returning(move || {
            let all = all.clone();
            Box::pin(async move { Ok(all) })
        });

        let ingredients = service(ingredient_repository).get_ingredients().await.unwrap();

        assert_eq!(ingredients, vec![flour, sugar]);
    }

    #[tokio::test]
    async fn delete_ingredient_fails_for_unknown_id() {
        let ingredient_id = Uuid::new_v4();

        let mut ingredient_repository = MockIngredientRepository::new();
        ingredient_repository
            .expect_get_by_id()
            .with(eq(ingredient_id))
            .returning(|_| Box::pin(async { Ok(None) }));
        ingredient_repository.expect_delete().times(0);

        let result = service(ingredient_repository)
            .delete_ingredient(ingredient_id)
            .await;

        assert_eq!(result, Err(CoreError::IngredientNotFound));
    }
}
