use crate::pokemon::{self, Payload};
use crate::{Api, Error, Result};

use std::collections::BTreeSet;
use std::sync::Mutex;
use std::time::Duration;

/// An in-memory PokeAPI that knows every Pokémon but the missing ones.
#[derive(Default)]
pub struct Stub {
    pub missing: BTreeSet<u32>,
    pub slow: BTreeSet<u32>,
    pub requests: Mutex<Vec<u32>>,
}

impl Stub {
    pub fn missing(numbers: impl IntoIterator<Item = u32>) -> Self {
        Self {
            missing: numbers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<u32> {
        let mut requests = self.requests.lock().expect("lock requests").clone();
        requests.sort_unstable();
        requests
    }
}

impl Api for Stub {
    async fn fetch(&self, id: pokemon::Id) -> Result<Payload> {
        let number = id.number();
        self.requests.lock().expect("lock requests").push(number);

        if self.slow.contains(&number) {
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        if self.missing.contains(&number) {
            return Err(Error::NotFound(id));
        }

        Ok(payload(number))
    }
}

pub fn payload(number: u32) -> Payload {
    serde_json::from_value(serde_json::json!({
        "id": number,
        "name": format!("mon-{number}"),
        "height": 7,
        "weight": 69,
        "types": [
            { "slot": 1, "type": { "name": "grass" } },
            { "slot": 2, "type": { "name": "poison" } }
        ],
        "abilities": [{ "ability": { "name": "overgrow" } }],
        "sprites": { "other": { "official-artwork": { "front_default": format!("{number}.png") } } },
        "stats": [
            { "base_stat": 45, "stat": { "name": "hp" } },
            { "base_stat": 130, "stat": { "name": "special-attack" } }
        ]
    }))
    .expect("valid payload")
}

pub fn id(number: u32) -> pokemon::Id {
    pokemon::Id::new(number).expect("non-zero id")
}
