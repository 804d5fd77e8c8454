//! Barangay (originating area) enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A barangay served by the reporting system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Barangay {
    #[serde(rename = "Bagong Silang")]
    BagongSilang,
    #[serde(rename = "Calendola")]
    Calendola,
    #[serde(rename = "Cuyab")]
    Cuyab,
    #[serde(rename = "Estrella")]
    Estrella,
    #[serde(rename = "G.S.I.S.")]
    Gsis,
    #[serde(rename = "Landayan")]
    Landayan,
    #[serde(rename = "Langgam")]
    Langgam,
    #[serde(rename = "Laram")]
    Laram,
    #[serde(rename = "Magsaysay")]
    Magsaysay,
    #[serde(rename = "Narra")]
    Narra,
    #[serde(rename = "Nueva")]
    Nueva,
    #[serde(rename = "Poblacion")]
    Poblacion,
    #[serde(rename = "Riverside")]
    Riverside,
    #[serde(rename = "Rosario")]
    Rosario,
    #[serde(rename = "Sampaguita Village")]
    SampaguitaVillage,
    #[serde(rename = "San Antonio")]
    SanAntonio,
    #[serde(rename = "San Roque")]
    SanRoque,
    #[serde(rename = "San Vicente")]
    SanVicente,
    #[serde(rename = "Santo Niño")]
    SantoNino,
    #[serde(rename = "United Bayanihan")]
    UnitedBayanihan,
    #[serde(rename = "United Better Living")]
    UnitedBetterLiving,
}

impl Barangay {
    /// Every barangay, in display order.
    pub const ALL: [Self; 21] = [
        Self::BagongSilang,
        Self::Calendola,
        Self::Cuyab,
        Self::Estrella,
        Self::Gsis,
        Self::Landayan,
        Self::Langgam,
        Self::Laram,
        Self::Magsaysay,
        Self::Narra,
        Self::Nueva,
        Self::Poblacion,
        Self::Riverside,
        Self::Rosario,
        Self::SampaguitaVillage,
        Self::SanAntonio,
        Self::SanRoque,
        Self::SanVicente,
        Self::SantoNino,
        Self::UnitedBayanihan,
        Self::UnitedBetterLiving,
    ];

    /// Display name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BagongSilang => "Bagong Silang",
            Self::Calendola => "Calendola",
            Self::Cuyab => "Cuyab",
            Self::Estrella => "Estrella",
            Self::Gsis => "G.S.I.S.",
            Self::Landayan => "Landayan",
            Self::Langgam => "Langgam",
            Self::Laram => "Laram",
            Self::Magsaysay => "Magsaysay",
            Self::Narra => "Narra",
            Self::Nueva => "Nueva",
            Self::Poblacion => "Poblacion",
            Self::Riverside => "Riverside",
            Self::Rosario => "Rosario",
            Self::SampaguitaVillage => "Sampaguita Village",
            Self::SanAntonio => "San Antonio",
            Self::SanRoque => "San Roque",
            Self::SanVicente => "San Vicente",
            Self::SantoNino => "Santo Niño",
            Self::UnitedBayanihan => "United Bayanihan",
            Self::UnitedBetterLiving => "United Better Living",
        }
    }
}

impl fmt::Display for Barangay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Barangay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| format!("Unknown barangay: {s}"))
    }
}
