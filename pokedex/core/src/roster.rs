use crate::pokemon;
use crate::{Favorites, Generation};

/// Where the Pokémon of a catalog come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roster {
    Generation(Generation),
    Favorites,
}

/// The favorite control drawn on every card of a [`Roster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    /// Adds or removes the Pokémon from the favorites in place.
    Toggle,
    /// Removes the Pokémon from the favorites and reloads the roster.
    Remove,
}

impl Roster {
    /// The Pokémon to fetch, in display order.
    ///
    /// Returns `None` when there is nothing to fetch at all.
    pub fn ids(self, favorites: &Favorites) -> Option<Vec<pokemon::Id>> {
        match self {
            Self::Generation(generation) => Some(generation.ids().collect()),
            Self::Favorites if favorites.is_empty() => None,
            Self::Favorites => Some(favorites.ids().to_vec()),
        }
    }

    pub fn decoration(self) -> Decoration {
        match self {
            Self::Generation(_) => Decoration::Toggle,
            Self::Favorites => Decoration::Remove,
        }
    }

    pub fn loading(self) -> &'static str {
        match self {
            Self::Generation(_) => "Loading Pokemon...",
            Self::Favorites => "Loading your favorites...",
        }
    }

    pub fn failed(self) -> &'static str {
        match self {
            Self::Generation(_) => "Failed to load Pokemon. Please try again.",
            Self::Favorites => "Failed to load favorites.",
        }
    }

    pub fn empty(self) -> &'static str {
        match self {
            Self::Generation(_) => "This generation has no Pokemon.",
            Self::Favorites => "You haven't added any favorites yet.",
        }
    }

    pub fn no_results(self) -> &'static str {
        "No Pokemon found"
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::Generation(Generation::default())
    }
}
