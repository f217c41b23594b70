use color_eyre::eyre::Result;
use dotenv::dotenv;
use registrar_api::config::ApiConfig;
use registrar_db::{create_pool, schema::initialize_database};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let config = ApiConfig::from_env()?;
    let db_pool = create_pool(&config.database_url, config.db_max_connections).await?;

    // Tables are created idempotently, so startup doubles as a migration.
    initialize_database(&db_pool).await?;

    registrar_api::start_server(config, db_pool).await?;

    Ok(())
}
