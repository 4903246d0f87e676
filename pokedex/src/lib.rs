pub use pokedex_core as core;

pub mod catalog;
pub mod pokemon;
pub mod session;

mod error;

pub use crate::core::{Catalog, Favorites, Generation, Map, Roster, Search};
pub use crate::core::{favorites, generation, roster};
pub use error::Error;
pub use pokemon::{Detail, Summary};
pub use session::{Api, Session};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod testing;
