use mockito::Matcher;
use pokepedia::{
    data::pokemon::PokemonRepository,
    error::{fetch::FetchError, Error},
    service::catalog::CatalogDriver,
};

use super::*;

/// Expect the listing to return entries in catalog order
#[tokio::test]
async fn lists_entries_in_order() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Pokemon)?;
    let bulbasaur = MockSpecies::new(1, "bulbasaur");
    let ivysaur = MockSpecies::new(2, "ivysaur");
    test.pokeapi()
        .with_catalog_endpoint(&[&ivysaur, &bulbasaur], CATALOG_LIMIT, 1);

    let fetcher = fetcher(1);
    let config = resolver_config();
    let driver = CatalogDriver::new(&test.db, &fetcher, &config, catalog_url(&test));

    let result = driver.list_catalog().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let entries = result.unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["ivysaur", "bulbasaur"]);
    assert!(entries[0].url.ends_with("/pokemon-species/2/"));
    test.assert_mocks();

    Ok(())
}

/// Expect a listing shorter than its reported count to still return what it has
#[tokio::test]
async fn returns_truncated_listing() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Pokemon)?;
    let bulbasaur = MockSpecies::new(1, "bulbasaur");
    let mut body = test.pokeapi().catalog_payload(&[&bulbasaur]);
    body["count"] = serde_json::json!(1025);
    let mock = test
        .server
        .mock("GET", "/pokemon-species/")
        .match_query(Matcher::UrlEncoded("limit".into(), CATALOG_LIMIT.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create();

    let fetcher = fetcher(1);
    let config = resolver_config();
    let driver = CatalogDriver::new(&test.db, &fetcher, &config, catalog_url(&test));

    let result = driver.list_catalog().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let entries = result.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "bulbasaur");
    mock.assert();

    Ok(())
}

/// Expect the run to abort when the catalog cannot be listed
#[tokio::test]
async fn aborts_when_listing_fails() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Pokemon)?;
    let mock = test
        .server
        .mock("GET", "/pokemon-species/")
        .match_query(Matcher::Any)
        .with_status(503)
        .expect(2)
        .create();

    let fetcher = fetcher(2);
    let config = resolver_config();
    let driver = CatalogDriver::new(&test.db, &fetcher, &config, catalog_url(&test));

    let result = driver.run().await;

    assert!(
        matches!(
            result,
            Err(Error::FetchError(FetchError::RetriesExhausted { attempts: 2, .. }))
        ),
        "Unexpected result: {:?}",
        result
    );
    mock.assert();

    let repo = PokemonRepository::new(&test.db);
    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Expect an empty catalog to produce a clean, empty summary
#[tokio::test]
async fn empty_catalog_is_clean() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Pokemon)?;
    test.pokeapi().with_catalog_endpoint(&[], CATALOG_LIMIT, 1);

    let fetcher = fetcher(1);
    let config = resolver_config();
    let driver = CatalogDriver::new(&test.db, &fetcher, &config, catalog_url(&test));

    let summary = driver.run().await.unwrap();

    assert_eq!(summary.attempted, 0);
    assert_eq!(summary.processed, 0);
    assert!(summary.is_clean());
    assert!(summary.cache_sizes.iter().all(|(_, size)| *size == 0));
    test.assert_mocks();

    Ok(())
}
