mod map;
mod search;

pub mod catalog;
pub mod favorites;
pub mod generation;
pub mod pokemon;
pub mod roster;

pub use catalog::Catalog;
pub use favorites::Favorites;
pub use generation::Generation;
pub use map::Map;
pub use pokemon::{Detail, Summary};
pub use roster::Roster;
pub use search::Search;
