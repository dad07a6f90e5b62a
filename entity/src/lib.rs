pub mod prelude;

pub mod pokemon;
