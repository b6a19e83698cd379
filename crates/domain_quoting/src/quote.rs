//! Quote value objects
//!
//! A quote is ephemeral: it is built for one pricing request, presented,
//! and discarded. Nothing here is persisted, so two identical requests
//! against the same tables compare equal.

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{Money, Rate};

use crate::client::Insured;

/// Pricing outcome for one insured
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteLineItem {
    pub insured: Insured,
    /// Base annual premium from the tariff; absent when the lookup
    /// missed
    pub base_rate: Option<Money>,
    /// Applied campaign discount percentage, zero when none
    pub discount_pct: Decimal,
    /// Premium after discount; absent when the lookup missed
    pub final_rate: Option<Money>,
    /// Name of the campaign that was selected, if any
    pub campaign: Option<String>,
    /// Lookup-miss description; the insured is excluded from the total
    pub warning: Option<String>,
}

impl QuoteLineItem {
    /// Builds the line item recorded when the tariff has no rate for
    /// the insured
    pub(crate) fn missing(insured: Insured, warning: String) -> Self {
        Self {
            insured,
            base_rate: None,
            discount_pct: Decimal::ZERO,
            final_rate: None,
            campaign: None,
            warning: Some(warning),
        }
    }

    /// Whether this line contributes to the quote total
    pub fn is_priced(&self) -> bool {
        self.final_rate.is_some()
    }
}

/// A priced, financed quote for a roster of insureds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// One line per insured, in roster order
    pub line_items: Vec<QuoteLineItem>,
    /// Sum of the priced lines' final rates
    pub total_annual_premium: Money,
    pub installment_count: u32,
    pub annual_interest_rate: Rate,
    /// Fixed periodic payment financing the total
    pub installment_amount: Money,
}

impl Quote {
    /// Warnings accumulated across line items
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.line_items
            .iter()
            .filter_map(|item| item.warning.as_deref())
    }

    /// True when every insured was priced
    pub fn fully_priced(&self) -> bool {
        self.line_items.iter().all(QuoteLineItem::is_priced)
    }
}
