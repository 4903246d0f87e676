use crate::pokemon::{self, Summary};
use crate::roster::Decoration;
use crate::{Favorites, Map, Search};

use std::fmt;

/// The Pokémon loaded for a page, in the order they were fetched.
#[derive(Clone)]
pub struct Catalog {
    pub pokemon: Map<pokemon::Id, Summary>,
}

impl Catalog {
    pub fn new(pokemon: Vec<Summary>) -> Self {
        Self {
            pokemon: Map::new(pokemon, |summary| summary.id),
        }
    }

    pub fn get(&self, id: pokemon::Id) -> Option<&Summary> {
        self.pokemon.get(&id)
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    /// Keeps every Pokémon whose name or number contains the query, ignoring case.
    pub fn search(&self, query: &str) -> Search<Summary> {
        let query = query.trim().to_lowercase();

        let matches: Vec<_> = self
            .pokemon
            .values()
            .iter()
            .filter(|summary| summary.matches(&query))
            .cloned()
            .collect();

        Search {
            matches: matches.into(),
        }
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("pokemon", &self.pokemon.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card<'a> {
    pub summary: &'a Summary,
    pub label: String,
    pub favorite: Favorite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Favorite {
    Toggle { active: bool },
    Remove,
}

impl<'a> Card<'a> {
    pub fn new(summary: &'a Summary, decoration: Decoration, favorites: &Favorites) -> Self {
        Self {
            summary,
            label: summary.id.to_string(),
            favorite: match decoration {
                Decoration::Toggle => Favorite::Toggle {
                    active: favorites.contains(summary.id),
                },
                Decoration::Remove => Favorite::Remove,
            },
        }
    }

    pub fn primary_type(&self) -> Option<&'a pokemon::Type> {
        self.summary.primary_type()
    }
}

pub fn cards<'a>(
    summaries: &'a [Summary],
    decoration: Decoration,
    favorites: &'a Favorites,
) -> impl Iterator<Item = Card<'a>> + 'a {
    summaries
        .iter()
        .map(move |summary| Card::new(summary, decoration, favorites))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::{Id, Type};

    fn summary(id: u32, name: &str) -> Summary {
        Summary {
            id: Id(id),
            name: name.to_owned(),
            types: vec![Type("normal".to_owned())],
            image: None,
        }
    }

    fn catalog(range: std::ops::RangeInclusive<u32>) -> Catalog {
        Catalog::new(range.map(|id| summary(id, &format!("mon-{id}"))).collect())
    }

    fn numbers(search: &Search<Summary>) -> Vec<u32> {
        search.matches.iter().map(|summary| summary.id.number()).collect()
    }

    #[test]
    fn search_by_number_substring() {
        let catalog = catalog(1..=300);
        let search = catalog.search("25");

        assert_eq!(
            numbers(&search),
            [25, 125, 225, 250, 251, 252, 253, 254, 255, 256, 257, 258, 259]
        );
    }

    #[test]
    fn search_ignores_case() {
        let catalog = Catalog::new(vec![
            summary(1, "bulbasaur"),
            summary(4, "charmander"),
            summary(6, "charizard"),
        ]);

        assert_eq!(numbers(&catalog.search("CHAR")), [4, 6]);
        assert_eq!(numbers(&catalog.search("  Saur ")), [1]);
        assert!(catalog.search("mew").is_empty());
    }

    #[test]
    fn search_is_idempotent() {
        let catalog = catalog(1..=151);
        let once = catalog.search("1");
        let twice = Catalog::new(once.matches.to_vec()).search("1");

        assert_eq!(numbers(&once), numbers(&twice));
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let catalog = catalog(1..=3);

        assert_eq!(numbers(&catalog.search("")), [1, 2, 3]);
        assert_eq!(catalog.get(Id(2)).map(|summary| summary.name.as_str()), Some("mon-2"));
        assert_eq!(catalog.get(Id(4)), None);
    }

    #[test]
    fn cards_follow_decoration() {
        let catalog = catalog(1..=3);
        let favorites = Favorites::from_iter([Id(2)]);

        let toggles: Vec<_> = cards(catalog.pokemon.values(), Decoration::Toggle, &favorites)
            .map(|card| (card.label, card.favorite))
            .collect();

        assert_eq!(
            toggles,
            [
                ("#001".to_owned(), Favorite::Toggle { active: false }),
                ("#002".to_owned(), Favorite::Toggle { active: true }),
                ("#003".to_owned(), Favorite::Toggle { active: false }),
            ]
        );

        assert!(
            cards(catalog.pokemon.values(), Decoration::Remove, &favorites)
                .all(|card| card.favorite == Favorite::Remove)
        );
    }
}
