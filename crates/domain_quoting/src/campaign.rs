//! Promotional campaign discounts
//!
//! Campaigns are time-bound discount grids injected alongside the rate
//! table. Resolution is deterministic: active window first, then kind
//! precedence (continuity clients prefer continuity campaigns with a
//! fallback to general ones), then first match in table source order.
//! The source-order tie-break is deliberate business behavior and must
//! not be replaced with a recency or best-discount rule.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use core_kernel::Money;

use crate::error::QuoteError;
use crate::plan::PlanCode;

/// Who a campaign is open to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignKind {
    /// Open to all clients
    General,
    /// Restricted to clients with continuity from a prior insurer
    Continuity,
}

/// A promotional campaign with per-plan discount percentages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kind: CampaignKind,
    /// Discount percentage per plan, in [0, 100); plans without an
    /// entry get no discount from this campaign
    #[serde(default)]
    pub discounts: HashMap<PlanCode, Decimal>,
}

impl Campaign {
    /// Creates a validated campaign
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        kind: CampaignKind,
        discounts: HashMap<PlanCode, Decimal>,
    ) -> Result<Self, QuoteError> {
        let campaign = Self {
            name: name.into(),
            start_date,
            end_date,
            kind,
            discounts,
        };
        campaign.validate()?;
        Ok(campaign)
    }

    fn validate(&self) -> Result<(), QuoteError> {
        if self.start_date > self.end_date {
            return Err(QuoteError::validation(format!(
                "Campaign \"{}\" starts {} after it ends {}",
                self.name, self.start_date, self.end_date
            )));
        }
        for (plan, pct) in &self.discounts {
            if *pct < dec!(0) || *pct >= dec!(100) {
                return Err(QuoteError::validation(format!(
                    "Campaign \"{}\" has an out-of-range discount {pct}% on {plan}",
                    self.name
                )));
            }
        }
        Ok(())
    }

    /// Whether the campaign window covers the given date
    pub fn is_active(&self, as_of: NaiveDate) -> bool {
        self.start_date <= as_of && as_of <= self.end_date
    }

    /// Discount percentage this campaign grants on a plan, if any
    pub fn discount_for(&self, plan: PlanCode) -> Option<Decimal> {
        self.discounts.get(&plan).copied()
    }
}

/// Result of resolving the applicable discount for one base premium
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountOutcome {
    /// Premium after the discount; equals the base when none applies
    pub final_rate: Money,
    /// Applied percentage, zero when no discount applies
    pub discount_pct: Decimal,
    /// Name of the selected campaign, if one was selected - reported
    /// even when the campaign carries no entry for the plan
    pub campaign: Option<String>,
}

/// The injected campaign table, kept in source order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignTable {
    campaigns: Vec<Campaign>,
}

impl CampaignTable {
    /// Builds a table, validating every campaign
    pub fn new(campaigns: Vec<Campaign>) -> Result<Self, QuoteError> {
        for campaign in &campaigns {
            campaign.validate()?;
        }
        Ok(Self { campaigns })
    }

    /// An empty table; every resolution yields no discount
    pub fn empty() -> Self {
        Self {
            campaigns: Vec::new(),
        }
    }

    /// Parses a table from the loading collaborator's JSON shape
    pub fn from_json(json: &str) -> Result<Self, QuoteError> {
        let campaigns: Vec<Campaign> = serde_json::from_str(json)
            .map_err(|e| QuoteError::data_source(format!("Malformed campaign table: {e}")))?;
        Self::new(campaigns)
    }

    /// Campaigns in source order
    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    /// Resolves the discount applicable to one base premium
    ///
    /// Continuity clients prefer continuity campaigns and fall back to
    /// general ones; everyone else only sees general campaigns. Among
    /// the matches the first in source order wins.
    pub fn resolve(
        &self,
        plan: PlanCode,
        base_rate: Money,
        as_of: NaiveDate,
        has_continuity: bool,
    ) -> DiscountOutcome {
        let active: Vec<&Campaign> = self
            .campaigns
            .iter()
            .filter(|c| c.is_active(as_of))
            .collect();

        let desired = if has_continuity {
            CampaignKind::Continuity
        } else {
            CampaignKind::General
        };

        let mut selected = active.iter().find(|c| c.kind == desired);
        if selected.is_none() && desired == CampaignKind::Continuity {
            selected = active.iter().find(|c| c.kind == CampaignKind::General);
        }

        let campaign = match selected {
            Some(campaign) => campaign,
            None => {
                return DiscountOutcome {
                    final_rate: base_rate,
                    discount_pct: dec!(0),
                    campaign: None,
                };
            }
        };

        match campaign.discount_for(plan) {
            Some(pct) => {
                debug!(campaign = %campaign.name, %plan, %pct, "Applying campaign discount");
                DiscountOutcome {
                    final_rate: base_rate.multiply(dec!(1) - pct / dec!(100)),
                    discount_pct: pct,
                    campaign: Some(campaign.name.clone()),
                }
            }
            None => {
                debug!(campaign = %campaign.name, %plan, "Selected campaign has no discount for plan");
                DiscountOutcome {
                    final_rate: base_rate,
                    discount_pct: dec!(0),
                    campaign: Some(campaign.name.clone()),
                }
            }
        }
    }
}
