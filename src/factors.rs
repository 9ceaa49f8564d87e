use serde::{Deserialize, Serialize};

use crate::Error;

/// A mode of transport, keyed by its table key (e.g. `aviao_longa`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    #[serde(rename = "carro")]
    Car,
    #[serde(rename = "onibus")]
    Bus,
    #[serde(rename = "trem")]
    Train,
    #[serde(rename = "aviao_curta")]
    ShortHaulFlight,
    #[serde(rename = "aviao_longa")]
    LongHaulFlight,
}

impl TransportMode {
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Car,
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::ShortHaulFlight,
        TransportMode::LongHaulFlight,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TransportMode::Car => "carro",
            TransportMode::Bus => "onibus",
            TransportMode::Train => "trem",
            TransportMode::ShortHaulFlight => "aviao_curta",
            TransportMode::LongHaulFlight => "aviao_longa",
        }
    }

    /// Emission factor in kg CO2 per passenger-kilometer
    pub fn factor(&self) -> f64 {
        match self {
            TransportMode::Car => 0.171,
            TransportMode::Bus => 0.105,
            TransportMode::Train => 0.041,
            TransportMode::ShortHaulFlight => 0.255,
            TransportMode::LongHaulFlight => 0.195,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::ShortHaulFlight => "short-haul flight",
            TransportMode::LongHaulFlight => "long-haul flight",
        }
    }

    /// Comma-separated list of all keys, in table order
    pub fn valid_keys() -> String {
        Self::ALL.map(|m| m.key()).join(", ")
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for TransportMode {
    type Err = Error;

    /// Case-insensitive lookup of a key
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| Error::UnknownMode {
                mode: s.to_string(),
            })
    }
}

/// An accommodation tier, keyed by its table key (e.g. `hotel_padrao`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LodgingTier {
    #[serde(rename = "hostel")]
    Hostel,
    #[serde(rename = "hotel_padrao")]
    StandardHotel,
    #[serde(rename = "hotel_luxo")]
    LuxuryHotel,
}

impl LodgingTier {
    pub const ALL: [LodgingTier; 3] = [
        LodgingTier::Hostel,
        LodgingTier::StandardHotel,
        LodgingTier::LuxuryHotel,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            LodgingTier::Hostel => "hostel",
            LodgingTier::StandardHotel => "hotel_padrao",
            LodgingTier::LuxuryHotel => "hotel_luxo",
        }
    }

    /// Emission factor in kg CO2 per night
    pub fn factor(&self) -> f64 {
        match self {
            LodgingTier::Hostel => 5.0,
            LodgingTier::StandardHotel => 15.0,
            LodgingTier::LuxuryHotel => 30.0,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LodgingTier::Hostel => "hostel",
            LodgingTier::StandardHotel => "standard hotel",
            LodgingTier::LuxuryHotel => "luxury hotel",
        }
    }

    /// Comma-separated list of all keys, in table order
    pub fn valid_keys() -> String {
        Self::ALL.map(|t| t.key()).join(", ")
    }
}

impl std::fmt::Display for LodgingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for LodgingTier {
    type Err = Error;

    /// Case-insensitive lookup of a key
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| Error::UnknownLodging {
                tier: s.to_string(),
            })
    }
}

/// A row of a factor table
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Factor {
    pub key: String,
    pub description: String,
    pub kg_co2: f64,
    pub unit: String,
}

/// Both factor tables, as used by the calculator
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FactorTable {
    pub transport: Vec<Factor>,
    pub lodging: Vec<Factor>,
}

impl FactorTable {
    pub fn current() -> Self {
        Self {
            transport: TransportMode::ALL
                .iter()
                .map(|m| Factor {
                    key: m.key().to_string(),
                    description: m.description().to_string(),
                    kg_co2: m.factor(),
                    unit: "passenger-km".to_string(),
                })
                .collect(),
            lodging: LodgingTier::ALL
                .iter()
                .map(|t| Factor {
                    key: t.key().to_string(),
                    description: t.description().to_string(),
                    kg_co2: t.factor(),
                    unit: "night".to_string(),
                })
                .collect(),
        }
    }

    /// Human-readable listing of both tables
    pub fn to_text(&self) -> String {
        let mut out = String::from("Transport (kg CO2 per passenger-km)\n");
        for f in &self.transport {
            out.push_str(&format!("  {:<12} {:>7.3}  {}\n", f.key, f.kg_co2, f.description));
        }
        out.push_str("\nLodging (kg CO2 per night)\n");
        for f in &self.lodging {
            out.push_str(&format!("  {:<12} {:>7.3}  {}\n", f.key, f.kg_co2, f.description));
        }
        out
    }
}
