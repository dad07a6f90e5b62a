use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};

use crate::{
    error::{store::StoreError, Error},
    model::record::SpeciesRecord,
};

/// Insert-only access to the species document collection.
pub struct PokemonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PokemonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert the document for `record`.
    ///
    /// # Arguments
    /// - `slug` - API identifier of the species, stored alongside the document
    /// - `record` - The resolved species record
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted row
    /// - `Err(Error::StoreError(StoreError::DuplicateKey))` - A document with the same name
    ///   or pokedex id is already stored
    /// - `Err(Error::DbErr)` - Any other database failure
    pub async fn create(
        &self,
        slug: &str,
        record: &SpeciesRecord,
    ) -> Result<entity::pokemon::Model, Error> {
        let document = serde_json::to_value(record)?;

        let pokemon = entity::pokemon::ActiveModel {
            pokedex_id: ActiveValue::Set(record.id),
            name: ActiveValue::Set(record.name.clone()),
            slug: ActiveValue::Set(slug.to_string()),
            document: ActiveValue::Set(document),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        pokemon.insert(self.db).await.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::DuplicateKey {
                name: record.name.clone(),
                pokedex_id: record.id,
            }
            .into(),
            _ => err.into(),
        })
    }

    /// Get a document using its national pokedex number
    pub async fn find_by_pokedex_id(
        &self,
        pokedex_id: i32,
    ) -> Result<Option<entity::pokemon::Model>, DbErr> {
        entity::prelude::Pokemon::find()
            .filter(entity::pokemon::Column::PokedexId.eq(pokedex_id))
            .one(self.db)
            .await
    }

    /// Get a document using its display name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::pokemon::Model>, DbErr> {
        entity::prelude::Pokemon::find()
            .filter(entity::pokemon::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// All stored documents in insertion order
    pub async fn all(&self) -> Result<Vec<entity::pokemon::Model>, DbErr> {
        entity::prelude::Pokemon::find()
            .order_by_asc(entity::pokemon::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Pokemon::find().count(self.db).await
    }
}

/// Decode a stored document back into the record it was created from.
pub fn decode_document(model: &entity::pokemon::Model) -> Result<SpeciesRecord, Error> {
    Ok(serde_json::from_value(model.document.clone())?)
}
