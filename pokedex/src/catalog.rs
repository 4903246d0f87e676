pub use crate::core::catalog::*;

use crate::pokemon;
use crate::{Api, Favorites, Result, Roster};

#[derive(Debug, Clone)]
pub enum Loaded {
    /// The roster had nothing to fetch.
    Empty,
    Pokemon(Catalog),
}

/// Fetches the Pokémon of a [`Roster`] and builds its [`Catalog`].
pub async fn load(api: &impl Api, roster: Roster, favorites: &Favorites) -> Result<Loaded> {
    let Some(ids) = roster.ids(favorites) else {
        return Ok(Loaded::Empty);
    };

    let pokemon = pokemon::fetch_all(api, ids).await?;

    Ok(Loaded::Pokemon(Catalog::new(pokemon)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Generation;
    use crate::testing::{Stub, id};

    #[tokio::test]
    async fn generation_fetches_its_whole_range() {
        let stub = Stub::default();

        let Loaded::Pokemon(catalog) = load(&stub, Roster::Generation(Generation::I), &Favorites::new())
            .await
            .expect("generation loads")
        else {
            panic!("generation should not be empty");
        };

        assert_eq!(catalog.len(), 151);
        assert_eq!(stub.requests(), (1..=151).collect::<Vec<_>>());
        assert_eq!(
            catalog.pokemon.values().first().map(|summary| summary.id),
            Some(id(1))
        );
    }

    #[tokio::test]
    async fn favorites_render_in_saved_order() {
        let stub = Stub::default();
        let favorites = Favorites::from_iter([7, 1, 4].map(id));

        let Loaded::Pokemon(catalog) = load(&stub, Roster::Favorites, &favorites)
            .await
            .expect("favorites load")
        else {
            panic!("favorites should not be empty");
        };

        let ids: Vec<_> = catalog.pokemon.values().iter().map(|summary| summary.id).collect();

        assert_eq!(ids, [7, 1, 4].map(id));
    }

    #[tokio::test]
    async fn removing_a_favorite_and_reloading() {
        let stub = Stub::default();
        let mut favorites = Favorites::from_iter([1, 4, 7].map(id));

        favorites.remove(id(4));

        let Loaded::Pokemon(catalog) = load(&stub, Roster::Favorites, &favorites)
            .await
            .expect("favorites load")
        else {
            panic!("favorites should not be empty");
        };

        let cards: Vec<_> = cards(catalog.pokemon.values(), Roster::Favorites.decoration(), &favorites)
            .map(|card| card.label)
            .collect();

        assert_eq!(cards, ["#001", "#007"]);
    }

    #[tokio::test]
    async fn empty_favorites_skip_fetching() {
        let stub = Stub::default();

        let loaded = load(&stub, Roster::Favorites, &Favorites::new())
            .await
            .expect("nothing to fail");

        assert!(matches!(loaded, Loaded::Empty));
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn failing_favorite_blanks_everything() {
        let stub = Stub::missing([4]);
        let favorites = Favorites::from_iter([1, 4, 7].map(id));

        assert!(load(&stub, Roster::Favorites, &favorites).await.is_err());
    }
}
