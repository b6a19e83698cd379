//! Client-facing input types
//!
//! This module holds the immutable inputs to a quoting request: the
//! prospective client's profile and the roster of insureds, plus the
//! district normalization and tier classification that drive the
//! recommendation rules.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::QuoteError;

/// Client sex as captured on the advisor form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// Relationship of an insured to the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    /// The contracting client; exactly one per quote, listed first
    PolicyHolder,
    /// A child dependent; priced on the children tariff bands
    Child,
    Spouse,
    Other,
}

/// One person covered by the quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insured {
    pub relation: Relation,
    pub age: u8,
}

impl Insured {
    pub fn policy_holder(age: u8) -> Self {
        Self {
            relation: Relation::PolicyHolder,
            age,
        }
    }

    pub fn child(age: u8) -> Self {
        Self {
            relation: Relation::Child,
            age,
        }
    }

    pub fn spouse(age: u8) -> Self {
        Self {
            relation: Relation::Spouse,
            age,
        }
    }

    pub fn other(age: u8) -> Self {
        Self {
            relation: Relation::Other,
            age,
        }
    }
}

/// District tier driving the recommendation branches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// Miraflores, San Isidro, La Molina, Santiago de Surco
    A,
    /// Los Olivos, San Juan de Lurigancho, San Juan de Miraflores
    B,
    /// Everything else, including unrecognized districts
    C,
}

const TIER_A_DISTRICTS: [&str; 4] = [
    "MIRAFLORES",
    "SAN ISIDRO",
    "LA MOLINA",
    "SANTIAGO DE SURCO",
];

const TIER_B_DISTRICTS: [&str; 3] = [
    "LOS OLIVOS",
    "SAN JUAN DE LURIGANCHO",
    "SAN JUAN DE MIRAFLORES",
];

/// A district name in its normalized form
///
/// Normalization strips Spanish diacritics and upper-cases, so the form
/// value "Jesús María" and a hand-typed "JESUS MARIA" compare equal.
/// "Cercado de Lima" is recorded under its tariff alias LIMA.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct District(String);

impl District {
    /// Districts selectable on the advisor form
    pub const CATALOG: [&'static str; 12] = [
        "Santiago de Surco",
        "Miraflores",
        "San Isidro",
        "San Juan de Lurigancho",
        "La Molina",
        "Cercado de Lima",
        "Jesús María",
        "San Juan de Miraflores",
        "San Borja",
        "Magdalena del Mar",
        "Pueblo Libre",
        "Otro",
    ];

    /// Normalizes a raw district name
    pub fn new(raw: &str) -> Self {
        let normalized = normalize_district(raw);
        // "Cercado de Lima" is keyed as LIMA everywhere downstream
        if normalized == "CERCADO DE LIMA" {
            return Self("LIMA".to_string());
        }
        Self(normalized)
    }

    /// Returns the normalized name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classifies the district into its recommendation tier
    ///
    /// Matching is exact on the normalized name; anything not in the
    /// tier-A or tier-B lists, including unrecognized districts, is
    /// tier-C.
    pub fn tier(&self) -> Tier {
        if TIER_A_DISTRICTS.contains(&self.0.as_str()) {
            Tier::A
        } else if TIER_B_DISTRICTS.contains(&self.0.as_str()) {
            Tier::B
        } else {
            Tier::C
        }
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for District {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl<'de> Deserialize<'de> for District {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(District::new(&raw))
    }
}

/// Strips Spanish diacritics and upper-cases
///
/// The input set is the closed catalog of Lima district names, so an
/// explicit fold of the Spanish marked letters is all that is needed.
fn normalize_district(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' | 'Á' | 'À' | 'Ä' | 'Â' => 'A',
            'é' | 'è' | 'ë' | 'ê' | 'É' | 'È' | 'Ë' | 'Ê' => 'E',
            'í' | 'ì' | 'ï' | 'î' | 'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
            'ó' | 'ò' | 'ö' | 'ô' | 'Ó' | 'Ò' | 'Ö' | 'Ô' => 'O',
            'ú' | 'ù' | 'ü' | 'û' | 'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
            'ñ' | 'Ñ' => 'N',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

/// The prospective client's profile as captured on the advisor form
///
/// Immutable once constructed; [`ClientProfile::new`] validates the
/// ranges the form enforces so the engine never sees out-of-range input
/// from other callers either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Client age in whole years, 18 to 90
    pub age: u8,
    /// Normalized district of residence
    pub district: District,
    pub sex: Sex,
    /// Number of affiliated members, 1 to 10
    pub dependent_count: u8,
    /// Whether the client transitions from a prior insurer without a
    /// coverage gap
    pub has_continuity: bool,
}

impl ClientProfile {
    pub const MIN_AGE: u8 = 18;
    pub const MAX_AGE: u8 = 90;
    pub const MIN_DEPENDENTS: u8 = 1;
    pub const MAX_DEPENDENTS: u8 = 10;

    /// Creates a validated profile
    pub fn new(
        age: u8,
        district: District,
        sex: Sex,
        dependent_count: u8,
        has_continuity: bool,
    ) -> Result<Self, QuoteError> {
        if !(Self::MIN_AGE..=Self::MAX_AGE).contains(&age) {
            return Err(QuoteError::validation(format!(
                "Client age {} is outside the allowed range {}-{}",
                age,
                Self::MIN_AGE,
                Self::MAX_AGE
            )));
        }
        if !(Self::MIN_DEPENDENTS..=Self::MAX_DEPENDENTS).contains(&dependent_count) {
            return Err(QuoteError::validation(format!(
                "Dependent count {} is outside the allowed range {}-{}",
                dependent_count,
                Self::MIN_DEPENDENTS,
                Self::MAX_DEPENDENTS
            )));
        }
        Ok(Self {
            age,
            district,
            sex,
            dependent_count,
            has_continuity,
        })
    }
}
