use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;
use std::fmt;

/// The highest base stat a bar is scaled against.
pub const MAX_BASE_STAT: u32 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Id(pub(crate) u32);

impl Id {
    pub fn new(number: u32) -> Option<Self> {
        if number == 0 {
            return None;
        }

        Some(Self(number))
    }

    pub fn number(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Id {
    type Error = InvalidId;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::new(number).ok_or(InvalidId)
    }
}

impl From<Id> for u32 {
    fn from(id: Id) -> Self {
        id.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidId;

impl fmt::Display for InvalidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("national dex numbers start at 1")
    }
}

impl std::error::Error for InvalidId {}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:03}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Type(pub(crate) String);

impl Type {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The raw `/pokemon/{id}` response, trimmed to the fields we read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Payload {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resource {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_: Resource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbilitySlot {
    pub ability: Resource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: Resource,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: BTreeMap<String, Artwork>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl Payload {
    pub fn types(&self) -> Vec<Type> {
        self.types
            .iter()
            .map(|slot| Type(slot.type_.name.clone()))
            .collect()
    }

    pub fn artwork(&self) -> Option<&str> {
        self.sprites
            .other
            .get("official-artwork")?
            .front_default
            .as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub id: Id,
    pub name: String,
    pub types: Vec<Type>,
    pub image: Option<String>,
}

impl Summary {
    pub fn primary_type(&self) -> Option<&Type> {
        self.types.first()
    }

    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query) || self.id.0.to_string().contains(query)
    }
}

impl From<&Payload> for Summary {
    fn from(payload: &Payload) -> Self {
        Self {
            id: payload.id,
            name: payload.name.clone(),
            types: payload.types(),
            image: payload.artwork().map(str::to_owned),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub id: Id,
    pub name: String,
    pub types: Vec<Type>,
    /// In meters.
    pub height: f32,
    /// In kilograms.
    pub weight: f32,
    pub abilities: Vec<String>,
    pub stats: Vec<Stat>,
}

impl Detail {
    pub fn primary_type(&self) -> Option<&Type> {
        self.types.first()
    }

    pub fn height(&self) -> String {
        format!("{:.1} m", self.height)
    }

    pub fn weight(&self) -> String {
        format!("{:.1} kg", self.weight)
    }

    pub fn abilities(&self) -> String {
        self.abilities
            .iter()
            .map(|ability| ability.replacen('-', " ", 1))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<Payload> for Detail {
    fn from(payload: Payload) -> Self {
        let types = payload.types();

        Self {
            id: payload.id,
            name: payload.name,
            types,
            height: payload.height as f32 / 10.0,
            weight: payload.weight as f32 / 10.0,
            abilities: payload
                .abilities
                .into_iter()
                .map(|slot| slot.ability.name)
                .collect(),
            stats: payload
                .stats
                .into_iter()
                .map(|slot| Stat {
                    name: slot.stat.name,
                    base: slot.base_stat,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub base: u32,
}

impl Stat {
    pub fn label(&self) -> String {
        self.name
            .replacen("special-", "sp. ", 1)
            .replacen("attack", "atk", 1)
            .replacen("defense", "def", 1)
    }

    /// How full the stat bar is, from 0 to 100.
    pub fn percent(&self) -> f32 {
        (self.base as f32 / MAX_BASE_STAT as f32 * 100.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "types": [{ "slot": 1, "type": { "name": "electric", "url": "" } }],
        "abilities": [
            { "ability": { "name": "static", "url": "" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "lightning-rod", "url": "" }, "is_hidden": true, "slot": 3 }
        ],
        "sprites": {
            "front_default": "front.png",
            "other": {
                "official-artwork": { "front_default": "artwork/25.png", "front_shiny": null },
                "home": { "front_default": "home/25.png" }
            }
        },
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp" } },
            { "base_stat": 55, "effort": 0, "stat": { "name": "attack" } },
            { "base_stat": 50, "effort": 0, "stat": { "name": "special-attack" } },
            { "base_stat": 50, "effort": 0, "stat": { "name": "special-defense" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed" } }
        ]
    }"#;

    fn pikachu() -> Payload {
        serde_json::from_str(PIKACHU).expect("valid payload")
    }

    #[test]
    fn id_is_zero_padded() {
        assert_eq!(Id(1).to_string(), "#001");
        assert_eq!(Id(25).to_string(), "#025");
        assert_eq!(Id(151).to_string(), "#151");
        assert_eq!(Id(1000).to_string(), "#1000");
        assert_eq!(Id::new(0), None);
    }

    #[test]
    fn zero_id_is_rejected() {
        assert_eq!(Id::try_from(7), Ok(Id(7)));
        assert!(serde_json::from_str::<Id>("0").is_err());
        assert!(serde_json::from_str::<Payload>(r#"{ "id": 0, "name": "missingno" }"#).is_err());
        assert_eq!(serde_json::to_string(&Id(25)).expect("serialize id"), "25");
    }

    #[test]
    fn summary_reads_official_artwork() {
        let summary = Summary::from(&pikachu());

        assert_eq!(summary.id, Id(25));
        assert_eq!(summary.name, "pikachu");
        assert_eq!(summary.types, vec![Type("electric".to_owned())]);
        assert_eq!(summary.image.as_deref(), Some("artwork/25.png"));
        assert_eq!(summary.primary_type().map(Type::as_str), Some("electric"));
    }

    #[test]
    fn missing_artwork_is_none() {
        let payload: Payload =
            serde_json::from_str(r#"{ "id": 10001, "name": "deoxys-attack", "sprites": { "other": {} } }"#)
                .expect("valid payload");

        assert_eq!(Summary::from(&payload).image, None);
        assert_eq!(payload.artwork(), None);
    }

    #[test]
    fn detail_converts_units() {
        let detail = Detail::from(pikachu());

        assert_eq!(detail.height(), "0.4 m");
        assert_eq!(detail.weight(), "6.0 kg");
        assert_eq!(detail.abilities(), "static, lightning rod");
    }

    #[test]
    fn ability_replaces_first_hyphen_only() {
        let detail = Detail {
            abilities: vec!["as-one-glastrier".to_owned()],
            ..Detail::from(pikachu())
        };

        assert_eq!(detail.abilities(), "as one-glastrier");
    }

    #[test]
    fn stat_labels_are_abbreviated() {
        let labels: Vec<_> = Detail::from(pikachu())
            .stats
            .iter()
            .map(Stat::label)
            .collect();

        assert_eq!(labels, ["hp", "atk", "sp. atk", "sp. def", "speed"]);
    }

    #[test]
    fn stat_percent_is_capped() {
        let stat = |base| Stat {
            name: "hp".to_owned(),
            base,
        };

        assert!((stat(130).percent() - 50.980_392).abs() < 0.001);
        assert_eq!(stat(0).percent(), 0.0);
        assert_eq!(stat(255).percent(), 100.0);
        assert_eq!(stat(300).percent(), 100.0);
    }

    #[test]
    fn summary_matches_name_or_number() {
        let summary = Summary::from(&pikachu());

        assert!(summary.matches("pika"));
        assert!(summary.matches("25"));
        assert!(summary.matches("2"));
        assert!(!summary.matches("#025"));
        assert!(!summary.matches("raichu"));
    }
}
