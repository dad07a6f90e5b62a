use sea_orm_migration::{prelude::*, schema::*};

static IDX_POKEMON_SLUG: &str = "idx_pokemon_slug";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pokemon::Table)
                    .if_not_exists()
                    .col(pk_auto(Pokemon::Id))
                    .col(integer_uniq(Pokemon::PokedexId))
                    .col(string_uniq(Pokemon::Name))
                    .col(string(Pokemon::Slug))
                    .col(json_binary(Pokemon::Document))
                    .col(timestamp(Pokemon::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POKEMON_SLUG)
                    .table(Pokemon::Table)
                    .col(Pokemon::Slug)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POKEMON_SLUG)
                    .table(Pokemon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Pokemon::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Pokemon {
    Table,
    Id,
    PokedexId,
    Name,
    Slug,
    Document,
    CreatedAt,
}
