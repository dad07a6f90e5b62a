use pokepedia::{config::Config, service::catalog::CatalogDriver, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    let fetcher = match startup::build_fetcher(&config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let driver = CatalogDriver::new(&db, &fetcher, &config.resolver, config.catalog_url());

    match driver.run().await {
        Ok(summary) => summary.log(),
        Err(e) => {
            tracing::error!("Failed to list the catalog: {}", e);
            std::process::exit(1);
        }
    }
}
