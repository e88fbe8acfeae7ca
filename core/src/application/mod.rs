use crate::{
    domain::common::{SpoonderfulConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        crypto::Argon2Hasher,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        jwt::JsonWebTokenSigner,
        recipe_source::SpoonacularClient,
        user::PostgresUserRepository,
        vote::PostgresVoteRepository,
    },
};

pub type SpoonderfulService = Service<
    PostgresUserRepository,
    PostgresVoteRepository,
    Argon2Hasher,
    JsonWebTokenSigner,
    SpoonacularClient,
    PostgresHealthCheckRepository,
>;

/// Connects to Postgres, runs migrations and wires every adapter.
pub async fn create_service(config: SpoonderfulConfig) -> Result<SpoonderfulService, CoreError> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await
    .map_err(|e| {
        tracing::error!("Failed to initialize database: {}", e);
        CoreError::InternalServerError
    })?;

    Ok(Service::new(
        PostgresUserRepository::new(postgres.get_db()),
        PostgresVoteRepository::new(postgres.get_db()),
        Argon2Hasher::new(),
        JsonWebTokenSigner::new(&config.auth)?,
        SpoonacularClient::new(&config.recipe_source),
        PostgresHealthCheckRepository::new(postgres.get_db()),
        config.recommendation,
        config.auth.access_token_duration_minutes,
    ))
}
