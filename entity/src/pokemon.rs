use sea_orm::entity::prelude::*;

/// One ingested species document.
///
/// `name` and `pokedex_id` are both unique; `document` holds the full
/// denormalized species record as JSON.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pokemon")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub pokedex_id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub slug: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub document: Json,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
