//! Tariff rate table
//!
//! The tariff is an injected table: one row per age-band label, one
//! column per plan code, one cell per base annual premium. The engine
//! never loads files itself; the loading collaborator hands over a
//! schema-valid [`RateTable`] or a typed failure.
//!
//! Band labels are categorical up to the banded thresholds and literal
//! per-year labels beyond them. Children and adults use distinct label
//! sets for the same numeric age up to 26; past 26 both derive the same
//! literal "{age} years" label. Whether the product intends children
//! and adults to share those literal rows is an open tariff-data
//! question; the shared namespace mirrors the observed lookup behavior.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

use core_kernel::{Currency, Money};

use crate::error::QuoteError;
use crate::plan::PlanCode;

/// Derives the tariff band label for an age
///
/// Adults: categorical bands through 25, then literal per-year labels.
/// Children: categorical bands through 26, then literal per-year labels
/// in the adult namespace.
pub fn band_label(age: u8, is_child: bool) -> String {
    if is_child {
        match age {
            0..=17 => "Children 0-17".to_string(),
            18..=25 => "Children 18-25".to_string(),
            26 => "Children 26".to_string(),
            _ => format!("{age} years"),
        }
    } else {
        match age {
            0..=17 => "0-17".to_string(),
            18..=25 => "18-25".to_string(),
            _ => format!("{age} years"),
        }
    }
}

/// A failed rate lookup
///
/// A miss is a per-line-item condition, not a request failure: the
/// aggregator records it as a warning on the line item and keeps the
/// quote going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateMiss {
    /// No tariff row carries the derived band label
    #[error("No tariff row for band \"{band}\"")]
    MissingBand { band: String },

    /// The row exists but the plan column is absent or the cell empty
    #[error("Plan {plan} has no rate in band \"{band}\"")]
    MissingRate { plan: PlanCode, band: String },
}

/// One tariff row: an age-band label and its per-plan premiums
///
/// A `None` cell means the plan column exists in the schema but the
/// band has no published premium for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRow {
    pub band: String,
    #[serde(default)]
    pub rates: HashMap<PlanCode, Option<Decimal>>,
}

impl RateRow {
    /// Returns the published premium for a plan, if any
    pub fn rate(&self, plan: PlanCode) -> Option<Decimal> {
        self.rates.get(&plan).copied().flatten()
    }
}

/// The injected tariff table
///
/// Rows keep their source order. The table is immutable once built;
/// callers reload a whole new table when the source data changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateTable {
    currency: Currency,
    rows: Vec<RateRow>,
    /// Column schema: every plan that appears in at least one row
    #[serde(skip)]
    plans: BTreeSet<PlanCode>,
}

impl RateTable {
    /// Builds a table from rows, validating the band-label invariant
    ///
    /// At most one row may carry a given band label, otherwise a lookup
    /// would be ambiguous.
    pub fn new(currency: Currency, rows: Vec<RateRow>) -> Result<Self, QuoteError> {
        let mut seen = BTreeSet::new();
        for row in &rows {
            if !seen.insert(row.band.clone()) {
                return Err(QuoteError::configuration(format!(
                    "Duplicate tariff band \"{}\"",
                    row.band
                )));
            }
        }

        let plans = rows
            .iter()
            .flat_map(|row| row.rates.keys().copied())
            .collect();

        Ok(Self {
            currency,
            rows,
            plans,
        })
    }

    /// Parses a table from the loading collaborator's JSON shape
    pub fn from_json(json: &str) -> Result<Self, QuoteError> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default = "default_currency")]
            currency: Currency,
            rows: Vec<RateRow>,
        }

        fn default_currency() -> Currency {
            Currency::PEN
        }

        let raw: Raw = serde_json::from_str(json)
            .map_err(|e| QuoteError::data_source(format!("Malformed rate table: {e}")))?;
        Self::new(raw.currency, raw.rows)
    }

    /// Currency the tariff premiums are published in
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Column schema of the table
    pub fn plans(&self) -> &BTreeSet<PlanCode> {
        &self.plans
    }

    /// Verifies that every required plan column exists in the schema
    pub fn ensure_plans(&self, required: &[PlanCode]) -> Result<(), QuoteError> {
        for plan in required {
            if !self.plans.contains(plan) {
                return Err(QuoteError::configuration(format!(
                    "Rate table is missing the {plan} column"
                )));
            }
        }
        Ok(())
    }

    /// Looks up the base annual premium for a plan and insured
    ///
    /// Absent row, absent column, and empty cell are all misses; a miss
    /// is never a zero premium.
    pub fn base_rate(&self, plan: PlanCode, age: u8, is_child: bool) -> Result<Money, RateMiss> {
        let band = band_label(age, is_child);
        let row = self
            .rows
            .iter()
            .find(|row| row.band == band)
            .ok_or_else(|| RateMiss::MissingBand { band: band.clone() })?;
        let rate = row
            .rate(plan)
            .ok_or_else(|| RateMiss::MissingRate { plan, band })?;
        Ok(Money::new(rate, self.currency))
    }
}
