use crate::domain::common::{LarderConfig, services::Service};
use crate::infrastructure::{
    db::postgres::{Postgres, PostgresConfig},
    health::PostgresHealthCheckRepository,
    ingredient::PostgresIngredientRepository,
    supplier::PostgresSupplierRepository,
    supplier_ingredient::PostgresSupplierIngredientRepository,
};

pub type LarderService = Service<
    PostgresIngredientRepository,
    PostgresSupplierRepository,
    PostgresSupplierIngredientRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: LarderConfig) -> Result<LarderService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    Ok(Service::new(
        PostgresIngredientRepository::new(postgres.get_db()),
        PostgresSupplierRepository::new(postgres.get_db()),
        PostgresSupplierIngredientRepository::new(postgres.get_db()),
        PostgresHealthCheckRepository::new(postgres.get_db()),
    ))
}
