//! Canonical test fixtures
//!
//! A tariff and campaign set shaped like the production tables: banded
//! rows through 25 (26 for children), literal per-year rows beyond, and
//! one general plus one continuity campaign active through 2024.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Currency;
use domain_quoting::{
    Campaign, CampaignKind, CampaignTable, Insured, PlanCode, RateRow, RateTable,
};

/// Base annual premium per plan for the adult "18-25" band
const PLAN_BASES: [(PlanCode, Decimal); 8] = [
    (PlanCode::MNAC, dec!(1200)),
    (PlanCode::MSLD, dec!(1000)),
    (PlanCode::MLSD, dec!(900)),
    (PlanCode::AM15, dec!(1050)),
    (PlanCode::AM17, dec!(980)),
    (PlanCode::AM18, dec!(1010)),
    (PlanCode::AM05, dec!(820)),
    (PlanCode::MINT, dec!(1600)),
];

/// Premium growth per year of age past the banded threshold
const PER_YEAR_STEP: Decimal = dec!(15);

fn scaled_row(band: &str, factor: Decimal) -> RateRow {
    RateRow {
        band: band.to_string(),
        rates: PLAN_BASES
            .iter()
            .map(|(plan, base)| (*plan, Some(base * factor)))
            .collect(),
    }
}

fn literal_row(age: u8) -> RateRow {
    RateRow {
        band: format!("{age} years"),
        rates: PLAN_BASES
            .iter()
            .map(|(plan, base)| (*plan, Some(base + Decimal::from(age - 25) * PER_YEAR_STEP)))
            .collect(),
    }
}

static STANDARD_RATE_TABLE: Lazy<RateTable> = Lazy::new(|| {
    let mut rows = vec![
        scaled_row("0-17", dec!(0.6)),
        scaled_row("18-25", dec!(1)),
        scaled_row("Children 0-17", dec!(0.55)),
        scaled_row("Children 18-25", dec!(0.8)),
        scaled_row("Children 26", dec!(0.85)),
    ];
    // Literal per-year rows shared by adults and children past 26
    for age in 26..=90 {
        rows.push(literal_row(age));
    }
    RateTable::new(Currency::PEN, rows).expect("fixture tariff is well-formed")
});

static STANDARD_CAMPAIGNS: Lazy<CampaignTable> = Lazy::new(|| {
    let general = Campaign::new(
        "Campaña Salud Total",
        date(2024, 1, 1),
        date(2024, 12, 31),
        CampaignKind::General,
        [
            (PlanCode::AM15, dec!(10)),
            (PlanCode::MSLD, dec!(8)),
            (PlanCode::MNAC, dec!(5)),
        ]
        .into_iter()
        .collect(),
    )
    .expect("fixture campaign is well-formed");

    let continuity = Campaign::new(
        "Campaña Continuidad Plus",
        date(2024, 1, 1),
        date(2024, 12, 31),
        CampaignKind::Continuity,
        [
            (PlanCode::AM15, dec!(15)),
            (PlanCode::MSLD, dec!(12)),
            (PlanCode::MNAC, dec!(8)),
            (PlanCode::MINT, dec!(10)),
        ]
        .into_iter()
        .collect(),
    )
    .expect("fixture campaign is well-formed");

    CampaignTable::new(vec![general, continuity]).expect("fixture table is well-formed")
});

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date is valid")
}

/// The quoting date both standard campaigns are active on
pub fn as_of() -> NaiveDate {
    date(2024, 6, 15)
}

/// Tariff with every catalog plan rated across all bands
pub fn standard_rate_table() -> RateTable {
    STANDARD_RATE_TABLE.clone()
}

/// One general (AM15 10%, MSLD 8%, MNAC 5%) and one continuity
/// (AM15 15%, MSLD 12%, MNAC 8%, MINT 10%) campaign, both active
/// through 2024
pub fn standard_campaigns() -> CampaignTable {
    STANDARD_CAMPAIGNS.clone()
}

/// A typical roster: policyholder 35, spouse 32, child 8
pub fn family_roster() -> Vec<Insured> {
    vec![
        Insured::policy_holder(35),
        Insured::spouse(32),
        Insured::child(8),
    ]
}
