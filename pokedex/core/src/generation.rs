use crate::pokemon;

use std::fmt;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Generation {
    #[default]
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
}

impl Generation {
    pub const ALL: &[Self] = &[
        Self::I,
        Self::II,
        Self::III,
        Self::IV,
        Self::V,
        Self::VI,
        Self::VII,
        Self::VIII,
    ];

    /// The inclusive range of national dex numbers introduced in this generation.
    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            Self::I => 1..=151,
            Self::II => 152..=251,
            Self::III => 252..=386,
            Self::IV => 387..=493,
            Self::V => 494..=649,
            Self::VI => 650..=721,
            Self::VII => 722..=809,
            Self::VIII => 810..=905,
        }
    }

    pub fn ids(self) -> impl Iterator<Item = pokemon::Id> {
        self.range().map(pokemon::Id)
    }

    pub fn len(self) -> usize {
        self.range().count()
    }

    pub fn region(self) -> &'static str {
        match self {
            Self::I => "Kanto",
            Self::II => "Johto",
            Self::III => "Hoenn",
            Self::IV => "Sinnoh",
            Self::V => "Unova",
            Self::VI => "Kalos",
            Self::VII => "Alola",
            Self::VIII => "Galar",
        }
    }

    fn number(self) -> usize {
        self as usize + 1
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generation {number} ({region})",
            number = self.number(),
            region = self.region()
        )
    }
}
