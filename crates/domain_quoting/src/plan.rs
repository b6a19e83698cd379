//! Integral plan catalog
//!
//! The product catalog is a closed set of plan codes. Codes never appear
//! as free-form strings inside the engine; tables and rules all key on
//! [`PlanCode`] so an unknown code is rejected at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A plan code from the integral product catalog
///
/// Not every code appears in every context: the recommender only ever
/// emits a subset, while rate tables and campaigns may carry columns for
/// the full catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlanCode {
    MNAC,
    MSLD,
    MLSD,
    AM15,
    AM17,
    AM18,
    AM05,
    MINT,
}

/// Error returned when parsing an unknown plan code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown plan code: {0}")]
pub struct UnknownPlanCode(pub String);

impl PlanCode {
    /// Every code in the catalog, in tariff column order
    pub const ALL: [PlanCode; 8] = [
        PlanCode::MNAC,
        PlanCode::MSLD,
        PlanCode::MLSD,
        PlanCode::AM15,
        PlanCode::AM17,
        PlanCode::AM18,
        PlanCode::AM05,
        PlanCode::MINT,
    ];

    /// Returns the catalog code as it appears in tariff columns
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanCode::MNAC => "MNAC",
            PlanCode::MSLD => "MSLD",
            PlanCode::MLSD => "MLSD",
            PlanCode::AM15 => "AM15",
            PlanCode::AM17 => "AM17",
            PlanCode::AM18 => "AM18",
            PlanCode::AM05 => "AM05",
            PlanCode::MINT => "MINT",
        }
    }

    /// Short advisor-facing description of the plan
    pub fn description(&self) -> &'static str {
        match self {
            PlanCode::MNAC => "Premium plan for established clients in top districts",
            PlanCode::MSLD => "Versatile standard plan for a broad range of profiles",
            PlanCode::MLSD => "Plan tailored to young women",
            PlanCode::AM15 => "Economy plan for price-sensitive profiles",
            PlanCode::AM17 => "Economy plan with extended outpatient coverage",
            PlanCode::AM18 => "Economy plan with extended hospitalization coverage",
            PlanCode::AM05 => "Reduced-coverage entry plan",
            PlanCode::MINT => "Plan with international coverage network",
        }
    }
}

impl fmt::Display for PlanCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanCode {
    type Err = UnknownPlanCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MNAC" => Ok(PlanCode::MNAC),
            "MSLD" => Ok(PlanCode::MSLD),
            "MLSD" => Ok(PlanCode::MLSD),
            "AM15" => Ok(PlanCode::AM15),
            "AM17" => Ok(PlanCode::AM17),
            "AM18" => Ok(PlanCode::AM18),
            "AM05" => Ok(PlanCode::AM05),
            "MINT" => Ok(PlanCode::MINT),
            _ => Err(UnknownPlanCode(s.to_string())),
        }
    }
}
