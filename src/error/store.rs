use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Insert rejected by the unique constraint on `name` or `pokedex_id`.
    #[error("A document named {name:?} or with pokedex id {pokedex_id} is already stored")]
    DuplicateKey { name: String, pokedex_id: i32 },
}
