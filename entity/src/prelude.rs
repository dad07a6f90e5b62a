pub use super::pokemon::Entity as Pokemon;
