use crate::pokemon;

use serde::{Deserialize, Deserializer, Serialize};

/// The user's favorite Pokémon, in the order they were added.
///
/// Never holds the same [`pokemon::Id`] twice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Favorites(Vec<pokemon::Id>);

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| String::from("[]"))
    }

    pub fn contains(&self, id: pokemon::Id) -> bool {
        self.0.contains(&id)
    }

    /// Adds the [`pokemon::Id`] if missing, removes it otherwise.
    ///
    /// Returns whether it is a favorite afterwards.
    pub fn toggle(&mut self, id: pokemon::Id) -> bool {
        if self.remove(id) {
            false
        } else {
            self.0.push(id);
            true
        }
    }

    pub fn remove(&mut self, id: pokemon::Id) -> bool {
        let before = self.0.len();
        self.0.retain(|favorite| *favorite != id);

        self.0.len() != before
    }

    pub fn ids(&self) -> &[pokemon::Id] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<pokemon::Id> for Favorites {
    fn from_iter<I: IntoIterator<Item = pokemon::Id>>(iter: I) -> Self {
        let mut favorites = Self::new();

        for id in iter {
            if !favorites.contains(id) {
                favorites.0.push(id);
            }
        }

        favorites
    }
}

impl<'de> Deserialize<'de> for Favorites {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = Vec::<pokemon::Id>::deserialize(deserializer)?;

        Ok(Self::from_iter(ids))
    }
}
