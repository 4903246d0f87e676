pub use crate::core::pokemon::*;

use crate::{Api, Result};

use futures_util::future;

/// Fetches every Pokémon concurrently and keeps the order of `ids`.
///
/// Fails as a whole as soon as any single request fails.
pub async fn fetch_all(
    api: &impl Api,
    ids: impl IntoIterator<Item = Id>,
) -> Result<Vec<Summary>> {
    let payloads = future::try_join_all(ids.into_iter().map(|id| api.fetch(id))).await?;

    log::info!("Fetched {} Pokémon", payloads.len());

    Ok(payloads.iter().map(Summary::from).collect())
}

pub async fn fetch_detail(api: &impl Api, id: Id) -> Result<Detail> {
    let payload = api.fetch(id).await?;

    Ok(Detail::from(payload))
}
