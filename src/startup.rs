use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::Error,
    service::fetch::{Fetcher, HttpTransport},
};

/// Install the fmt subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Build the retrying fetcher for the configured API
pub fn build_fetcher(config: &Config) -> Result<Fetcher<HttpTransport>, Error> {
    let transport = HttpTransport::with_user_agent(&config.fetch.user_agent)?;

    Ok(Fetcher::new(transport, &config.fetch))
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
