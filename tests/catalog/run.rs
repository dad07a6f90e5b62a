use pokepedia::{
    data::pokemon::{decode_document, PokemonRepository},
    error::{resolve::ResolveError, store::StoreError, Error, FailureKind},
    service::catalog::CatalogDriver,
};

use super::*;

/// Expect every entry of a healthy catalog to be stored in listing order
#[tokio::test]
async fn stores_every_entry() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Pokemon)?;
    let bulbasaur = MockSpecies::new(1, "bulbasaur").with_chain(1, &["ivysaur"]);
    let ivysaur = MockSpecies::new(2, "ivysaur")
        .with_chain(2, &[])
        .with_moves(&[("tackle", 1), ("vine-whip", 7)]);
    test.pokeapi()
        .with_catalog_endpoint(&[&bulbasaur, &ivysaur], CATALOG_LIMIT, 1);
    test.pokeapi().with_species_endpoints(&bulbasaur, 1);
    test.pokeapi().with_species_endpoints(&ivysaur, 1);
    test.pokeapi()
        .with_reference_endpoints(&[&bulbasaur, &ivysaur], 1);

    let fetcher = fetcher(1);
    let config = resolver_config();
    let driver = CatalogDriver::new(&test.db, &fetcher, &config, catalog_url(&test));

    let summary = driver.run().await.unwrap();

    assert_eq!(summary.attempted, 2);
    assert_eq!(summary.processed, 2);
    assert!(summary.is_clean(), "Failures: {:?}", summary.failed);
    assert!(summary.cache_sizes.contains(&("move", 3)));
    assert!(summary.cache_sizes.contains(&("ability", 2)));

    let repo = PokemonRepository::new(&test.db);
    let stored = repo.all().await?;
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].slug, "bulbasaur");
    assert_eq!(stored[1].slug, "ivysaur");

    let record = decode_document(&stored[1]).unwrap();
    assert_eq!(record.id, 2);
    assert_eq!(record.name, "Ivysaur");
    assert_eq!(record.moves[1].details.name, "Vine Whip");
    assert_eq!(record.moves[1].level, 7);

    test.assert_mocks();

    Ok(())
}

/// Expect a network failure of one entry to be recorded while its neighbours are stored
#[tokio::test]
async fn isolates_network_failure() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Pokemon)?;
    let bulbasaur = MockSpecies::new(1, "bulbasaur");
    let ivysaur = MockSpecies::new(2, "ivysaur");
    let venusaur = MockSpecies::new(3, "venusaur");
    test.pokeapi()
        .with_catalog_endpoint(&[&bulbasaur, &ivysaur, &venusaur], CATALOG_LIMIT, 1);
    test.pokeapi().with_species_endpoints(&bulbasaur, 1);
    test.pokeapi()
        .with_species_endpoints_failing_chain(&ivysaur, 500, 3);
    test.pokeapi().with_species_endpoints(&venusaur, 1);
    test.pokeapi()
        .with_reference_endpoints(&[&bulbasaur, &venusaur], 1);

    let fetcher = fetcher(3);
    let config = resolver_config();
    let driver = CatalogDriver::new(&test.db, &fetcher, &config, catalog_url(&test));

    let summary = driver.run().await.unwrap();

    assert_eq!(summary.attempted, 3);
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.failed_count(), 1);

    let failed = summary.failure_for("ivysaur").unwrap();
    assert_eq!(failed.index, 1);
    assert_eq!(failed.kind(), FailureKind::Network);
    assert_eq!(summary.failures_by_kind().get(&FailureKind::Network), Some(&1));

    let repo = PokemonRepository::new(&test.db);
    let stored: Vec<String> = repo.all().await?.into_iter().map(|m| m.slug).collect();
    assert_eq!(stored, vec!["bulbasaur", "venusaur"]);

    test.assert_mocks();

    Ok(())
}

/// Expect an uninterpretable payload to fail only its own entry
#[tokio::test]
async fn isolates_data_shape_failure() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Pokemon)?;
    let bulbasaur = MockSpecies::new(1, "bulbasaur");
    let missingno = MockSpecies::new(0, "missingno").without_default_variety();
    test.pokeapi()
        .with_catalog_endpoint(&[&missingno, &bulbasaur], CATALOG_LIMIT, 1);
    let body = test.pokeapi().species_payload(&missingno);
    let mock = test
        .pokeapi()
        .create_json_endpoint(&missingno.species_path(), &body, 1);
    test.mocks.push(mock);
    test.pokeapi().with_species_endpoints(&bulbasaur, 1);
    test.pokeapi().with_reference_endpoints(&[&bulbasaur], 1);

    let fetcher = fetcher(1);
    let config = resolver_config();
    let driver = CatalogDriver::new(&test.db, &fetcher, &config, catalog_url(&test));

    let summary = driver.run().await.unwrap();

    assert_eq!(summary.processed, 1);
    let failed = summary.failure_for("missingno").unwrap();
    assert_eq!(failed.index, 0);
    assert_eq!(failed.kind(), FailureKind::DataShape);
    assert!(matches!(
        failed.error,
        Error::ResolveError(ResolveError::DefaultVarietyMissing(_))
    ));

    let repo = PokemonRepository::new(&test.db);
    assert!(repo.find_by_pokedex_id(1).await?.is_some());
    assert!(repo.find_by_name("Missingno").await?.is_none());

    test.assert_mocks();

    Ok(())
}

/// Expect a second run over the same catalog to record conflicts instead of overwriting
#[tokio::test]
async fn records_duplicate_as_conflict() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Pokemon)?;
    let bulbasaur = MockSpecies::new(1, "bulbasaur");
    test.pokeapi()
        .with_catalog_endpoint(&[&bulbasaur], CATALOG_LIMIT, 2);
    test.pokeapi().with_species_endpoints(&bulbasaur, 2);
    // Caches live for one run, so the second run fetches references again
    test.pokeapi().with_reference_endpoints(&[&bulbasaur], 2);

    let fetcher = fetcher(1);
    let config = resolver_config();
    let driver = CatalogDriver::new(&test.db, &fetcher, &config, catalog_url(&test));

    let first = driver.run().await.unwrap();
    let second = driver.run().await.unwrap();

    assert!(first.is_clean());
    assert_eq!(second.processed, 0);
    let failed = second.failure_for("bulbasaur").unwrap();
    assert_eq!(failed.kind(), FailureKind::Conflict);
    assert!(matches!(
        failed.error,
        Error::StoreError(StoreError::DuplicateKey { pokedex_id: 1, .. })
    ));

    let repo = PokemonRepository::new(&test.db);
    assert_eq!(repo.count().await?, 1);

    test.assert_mocks();

    Ok(())
}
