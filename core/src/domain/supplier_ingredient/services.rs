use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    supplier::ports::SupplierRepository,
    supplier_ingredient::{
        entities::SupplierIngredient,
        ports::{SupplierIngredientRepository, SupplierIngredientService},
        value_objects::{LinkIngredientsInput, LinkOptions, PriceListInput},
    },
};

impl<I, S, L, H> SupplierIngredientService for Service<I, S, L, H>
where
    I: IngredientRepository,
    S: SupplierRepository,
    L: SupplierIngredientRepository,
    H: HealthCheckRepository,
{
    async fn link_ingredients(
        &self,
        input: LinkIngredientsInput,
    ) -> Result<Vec<SupplierIngredient>, CoreError> {
        let supplier = self
            .supplier_repository
            .get_by_id(input.supplier_id)
            .await?
            .ok_or(CoreError::SupplierNotFound)?;

        // Keep only selections that match an existing ingredient; stale ids
        // from an outdated form are dropped, not an error
        let links = self
            .ingredient_repository
            .fetch_all()
            .await?
            .into_iter()
            .filter(|ingredient| input.ingredient_ids.contains(&ingredient.id))
            .map(|ingredient| SupplierIngredient::new(supplier.id, ingredient.id, None))
            .collect::<Vec<SupplierIngredient>>();

        self.supplier_ingredient_repository.create_links(links).await
    }

    async fn record_price_list(
        &self,
        input: PriceListInput,
    ) -> Result<Vec<SupplierIngredient>, CoreError> {
        let supplier = self
            .supplier_repository
            .get_by_name(input.supplier)
            .await?
            .ok_or(CoreError::SupplierNotFound)?;

        let mut links = Vec::with_capacity(input.unit_costs.len());
        for (name, unit_cost) in input.unit_costs {
            // Names that resolve to no ingredient are skipped silently
            if let Some(ingredient) = self.ingredient_repository.get_by_name(name).await? {
                links.push(SupplierIngredient::new(
                    supplier.id,
                    ingredient.id,
                    Some(unit_cost),
                ));
            }
        }

        self.supplier_ingredient_repository.create_links(links).await
    }

    async fn get_supplier_ingredients(&self) -> Result<Vec<SupplierIngredient>, CoreError> {
        self.supplier_ingredient_repository.fetch_all().await
    }

    async fn get_link_options(&self) -> Result<LinkOptions, CoreError> {
        let suppliers = self.supplier_repository.fetch_all().await?;
        let ingredients = self.ingredient_repository.fetch_all().await?;

        Ok(LinkOptions {
            suppliers,
            ingredients,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use mockall::predicate::eq;
    use uuid::Uuid;

    use crate::domain::common::entities::app_errors::CoreError;
    use crate::domain::common::services::Service;
    use crate::domain::health::ports::MockHealthCheckRepository;
    use crate::domain::ingredient::entities::Ingredient;
    use crate::domain::ingredient::ports::MockIngredientRepository;
    use crate::domain::supplier::entities::Supplier;
    use crate::domain::supplier::ports::MockSupplierRepository;
    use crate::domain::supplier_ingredient::ports::{
        MockSupplierIngredientRepository, SupplierIngredientService,
    };
    use crate::domain::supplier_ingredient::value_objects::{
        LinkIngredientsInput, PriceListInput,
    };

    fn service(
        ingredient_repository: MockIngredientRepository,
        supplier_repository: MockSupplierRepository,
        supplier_ingredient_repository: MockSupplierIngredientRepository,
    ) -> Service<
        MockIngredientRepository,
        MockSupplierRepository,
        MockSupplierIngredientRepository,
        MockHealthCheckRepository,
    > {
        Service::new(
            ingredient_repository,
            supplier_repository,
            supplier_ingredient_repository,
            MockHealthCheckRepository::new(),
        )
    }

    fn acme() -> Supplier {
        Supplier::new("Acme".to_string(), "0712345678".to_string(), None)
    }

    #[tokio::test]
    async fn link_ingredients_creates_one_link_per_selected_ingredient() {
        let supplier = acme();
        let flour = Ingredient::new("Flour".to_string(), Some("kg".to_string()));
        let sugar = Ingredient::new("Sugar".to_string(), Some("g".to_string()));
        let salt = Ingredient::new("Salt".to_string(), None);

        let mut supplier_repository = MockSupplierRepository::new();
        let found = supplier.clone();
        supplier_repository
            .expect_get_by_id()
            .with(eq(supplier.id))
            .returning(move |_| {
                let found = found.clone();
                Box::pin(async move { Ok(Some(found)) })
            });

        let mut ingredient_repository = MockIngredientRepository::new();
        let all = vec![flour.clone(), sugar.clone(), salt.clone()];
        ingredient_repository.expect_fetch_all().returning(move || {
            let all = all.clone();
            Box::pin(async move { Ok(all) })
        });

        let mut supplier_ingredient_repository = MockSupplierIngredientRepository::new();
        supplier_ingredient_repository
            .expect_create_links()
            .returning(|links| Box::pin(async move { Ok(links) }));

        let links = service(
            ingredient_repository,
            supplier_repository,
            supplier_ingredient_repository,
        )
        .link_ingredients(LinkIngredientsInput {
            supplier_id: supplier.id,
            ingredient_ids: vec![flour.id, salt.id],
        })
        .await
        .unwrap();

        assert_eq!(links.len(), 2);
        assert!(links.iter().all(|l| l.supplier_id == supplier.id));
        assert!(links.iter().all(|l| l.unit_cost.is_none()));
        assert!(links.iter().any(|l| l.ingredient_id == flour.id));
        assert!(links.iter().any(|l| l.ingredient_id == salt.id));
    }

    #[tokio::test]
    async fn link_ingredients_skips_selection_ids_that_no_longer_exist() {
        let supplier = acme();
        let flour = Ingredient::new("Flour".to_string(), None);

        let mut supplier_repository = MockSupplierRepository::new();
        let found = supplier.clone();
        supplier_repository.expect_get_by_id().returning(move |_| {
            let found = found.clone();
            Box::pin(async move { Ok(Some(found)) })
        });

        let mut ingredient_repository = MockIngredientRepository::new();
        let all = vec![flour.clone()];
        ingredient_repository.expect_fetch_all().returning(move || {
            let all = all.clone();
            Box::pin(async move { Ok(all) })
        });

        let mut supplier_ingredient_repository = MockSupplierIngredientRepository::new();
        supplier_ingredient_repository
            .expect_create_links()
            .returning(|links| Box::pin(async move { Ok(links) }));

        let links = service(
            ingredient_repository,
            supplier_repository,
            supplier_ingredient_repository,
        )
        .link_ingredients(LinkIngredientsInput {
            supplier_id: supplier.id,
            ingredient_ids: vec![flour.id, Uuid::new_v4()],
        })
        .await
        .unwrap();

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].ingredient_id, flour.id);
    }

    #[tokio::test]
    async fn link_ingredients_fails_fast_for_unknown_supplier() {
        let mut supplier_repository = MockSupplierRepository::new();
        supplier_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let ingredient_repository = MockIngredientRepository::new();

        let mut supplier_ingredient_repository = MockSupplierIngredientRepository::new();
        supplier_ingredient_repository.expect_create_links().times(0);

        let result = service(
            ingredient_repository,
            supplier_repository,
            supplier_ingredient_repository,
        )
        .link_ingredients(LinkIngredientsInput {
            supplier_id: Uuid::new_v4(),
            ingredient_ids: vec![Uuid::new_v4()],
        })
        .await;

        assert_eq!(result, Err(CoreError::SupplierNotFound));
    }

    #[tokio::test]
    async fn record_price_list_creates_priced_links() {
        let supplier = acme();
        let flour = Ingredient::new("Flour".to_string(), None);
        let sugar = Ingredient::new("Sugar".to_string(), None);

        let mut supplier_repository = MockSupplierRepository::new();
        let found = supplier.clone();
        supplier_repository
            .expect_get_by_name()
            .with(eq("Acme".to_string()))
            .returning(move |_| {
                let found = found.clone();
                Box::pin(async move { Ok(Some(found)) })
            });

        let mut ingredient_repository = MockIngredientRepository::new();
        let by_name: HashMap<String, Ingredient> = [
            ("Flour".to_string(), flour.clone()),
            ("Sugar".to_string(), sugar.clone()),
        ]
        .into_iter()
        .collect();
        ingredient_repository
            .expect_get_by_name()
            .returning(move |name| {
                let found = by_name.get(&name).cloned();
                Box::pin(async move { Ok(found) })
            });

        let mut supplier_ingredient_repository = MockSupplierIngredientRepository::new();
        supplier_ingredient_repository
            .expect_create_links()
            .returning(|links| Box::pin(async move { Ok(links) }));

        let links = service(
            ingredient_repository,
            supplier_repository,
            supplier_ingredient_repository,
        )
        .record_price_list(PriceListInput {
            supplier: "Acme".to_string(),
            unit_costs: [("Flour".to_string(), 10), ("Sugar".to_string(), 5)]
                .into_iter()
                .collect(),
        })
        .await
        .unwrap();

        assert_eq!(links.len(), 2);
        let flour_link = links.iter().find(|l| l.ingredient_id == flour.id).unwrap();
        let sugar_link = links.iter().find(|l| l.ingredient_id == sugar.id).unwrap();
        assert_eq!(flour_link.unit_cost, Some(10));
        assert_eq!(sugar_link.unit_cost, Some(5));
        assert!(links.iter().all(|l| l.supplier_id == supplier.id));
    }

    #[tokio::test]
    async fn record_price_list_fails_fast_for_unknown_supplier() {
        let mut supplier_repository = MockSupplierRepository::new();
        supplier_repository
            .expect_get_by_name()
            .with(eq("Unknown".to_string()))
            .returning(|_| Box::pin(async { Ok(None) }));

        let mut ingredient_repository = MockIngredientRepository::new();
        ingredient_repository.expect_get_by_name().times(0);

        let mut supplier_ingredient_repository = MockSupplierIngredientRepository::new();
        supplier_ingredient_repository.expect_create_links().times(0);

        let result = service(
            ingredient_repository,
            supplier_repository,
            supplier_ingredient_repository,
        )
        .record_price_list(PriceListInput {
            supplier: "Unknown".to_string(),
            unit_costs: [("Flour".to_string(), 10)].into_iter().collect(),
        })
        .await;

        assert_eq!(result, Err(CoreError::SupplierNotFound));
    }

    #[tokio::test]
    async fn record_price_list_silently_skips_unknown_ingredient_names() {
        let supplier = acme();

        let mut supplier_repository = MockSupplierRepository::new();
        let found = supplier.clone();
        supplier_repository.expect_get_by_name().returning(move |_| {
            let found = found.clone();
            Box::pin(async move { Ok(Some(found)) })
        });

        let mut ingredient_repository = MockIngredientRepository::new();
        ingredient_repository
            .expect_get_by_name()
            .with(eq("Nonexistent".to_string()))
            .returning(|_| Box::pin(async { Ok(None) }));

        let mut supplier_ingredient_repository = MockSupplierIngredientRepository::new();
        supplier_ingredient_repository
            .expect_create_links()
            .withf(|links| links.is_empty())
            .returning(|links| Box::pin(async move { Ok(links) }));

        let links = service(
            ingredient_repository,
            supplier_repository,
            supplier_ingredient_repository,
        )
        .record_price_list(PriceListInput {
            supplier: "Acme".to_string(),
            unit_costs: [("Nonexistent".to_string(), 10)].into_iter().collect(),
        })
        .await
        .unwrap();

        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn get_link_options_returns_current_suppliers_and_ingredients() {
        let supplier = acme();
        let flour = Ingredient::new("Flour".to_string(), None);

        let mut supplier_repository = MockSupplierRepository::new();
        let suppliers = vec![supplier.clone()];
        supplier_repository.expect_fetch_all().returning(move || {
            let suppliers = suppliers.clone();
            Box::pin(async move { Ok(suppliers) })
        });

        let mut ingredient_repository = MockIngredientRepository::new();
        let ingredients = vec![flour.clone()];
        ingredient_repository.expect_fetch_all().returning(move || {
            let ingredients = ingredients.clone();
            Box::pin(async move { Ok(ingredients) })
        });

        let options = service(
            ingredient_repository,
            supplier_repository,
            MockSupplierIngredientRepository::new(),
        )
        .get_link_options()
        .await
        .unwrap();

        assert_eq!(options.suppliers, vec![supplier]);
        assert_eq!(options.ingredients, vec![flour]);
    }
}
