use crate::pokemon;
use crate::{Error, Result};

use bytes::Bytes;
use std::sync::{Arc, LazyLock};

pub const DEFAULT_URL: &str = "https://pokeapi.co/api/v2";

/// A source of raw Pokémon data, keyed by national dex number.
pub trait Api: Send + Sync {
    fn fetch(&self, id: pokemon::Id) -> impl Future<Output = Result<pokemon::Payload>> + Send;
}

#[derive(Debug, Clone)]
pub struct Session {
    client: reqwest::Client,
    url: Arc<str>,
}

impl Session {
    pub fn new(url: impl AsRef<str>) -> Self {
        let url = url.as_ref().trim_end_matches('/');

        log::info!("PokeAPI session started ({url})");

        Self {
            client: CLIENT.clone(),
            url: Arc::from(url),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn download(&self, url: &str) -> Result<Bytes> {
        log::info!("Downloading image: {url}");

        let response = self.client.get(url).send().await?;

        Ok(response.error_for_status()?.bytes().await?)
    }
}

impl Api for Session {
    async fn fetch(&self, id: pokemon::Id) -> Result<pokemon::Payload> {
        let url = format!("{base}/pokemon/{number}", base = self.url, number = id.number());

        log::info!("Fetching Pokémon: {url}");

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(id));
        }

        Ok(response.error_for_status()?.json().await?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::ClientBuilder::new()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Build reqwest client")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_normalized() {
        assert_eq!(Session::new("http://localhost:8080/api/v2/").url(), "http://localhost:8080/api/v2");
        assert_eq!(Session::default().url(), DEFAULT_URL);
    }
}
