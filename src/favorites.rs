pub use crate::pokedex::Favorites;

use crate::pokedex::pokemon;

use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

/// The favorites file on disk, a JSON array of national dex numbers.
///
/// Mutations are applied one at a time, in the order they were requested.
#[derive(Debug, Clone)]
pub struct Store {
    path: Arc<Path>,
    writer: Arc<Mutex<()>>,
}

impl Store {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: Arc::from(data_dir.as_ref().join("favorites.json")),
            writer: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load<'a>(&self) -> impl Future<Output = Result<Favorites, anywho::Error>> + 'a {
        let path = self.path.clone();

        async move {
            if !fs::try_exists(&path).await? {
                return Ok(Favorites::new());
            }

            let json = fs::read_to_string(&path).await?;

            Ok(Favorites::parse(&json)?)
        }
    }

    pub fn save<'a>(
        &self,
        favorites: &Favorites,
    ) -> impl Future<Output = Result<(), anywho::Error>> + 'a {
        let path = self.path.clone();
        let json = favorites.to_json();

        async move {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).await?;
            }

            fs::write(&path, json).await?;

            Ok(())
        }
    }

    pub fn toggle<'a>(
        &self,
        id: pokemon::Id,
    ) -> impl Future<Output = Result<Favorites, anywho::Error>> + 'a {
        self.update(move |favorites| {
            favorites.toggle(id);
        })
    }

    pub fn remove<'a>(
        &self,
        id: pokemon::Id,
    ) -> impl Future<Output = Result<Favorites, anywho::Error>> + 'a {
        self.update(move |favorites| {
            favorites.remove(id);
        })
    }

    fn update<'a>(
        &self,
        f: impl FnOnce(&mut Favorites) + Send + 'a,
    ) -> impl Future<Output = Result<Favorites, anywho::Error>> + 'a {
        let store = self.clone();

        async move {
            let _writer = store.writer.lock().await;

            let mut favorites = store.load().await?;
            f(&mut favorites);

            store.save(&favorites).await?;

            log::info!(
                "Saved {} favorite(s) to {}",
                favorites.len(),
                store.path.display()
            );

            Ok(favorites)
        }
    }
}
