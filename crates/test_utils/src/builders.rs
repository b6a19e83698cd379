//! Test data builders
//!
//! Builder patterns for constructing test data with sensible defaults,
//! so tests specify only the fields relevant to the behavior under
//! test. Builders panic on invalid combinations; a test that builds
//! bad data should fail loudly at the build site.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::Currency;
use domain_quoting::{
    Campaign, CampaignKind, ClientProfile, District, PlanCode, RateRow, RateTable, Sex,
};

use crate::fixtures;

/// Builder for [`ClientProfile`] test data
///
/// Defaults to a 30-year-old male in Miraflores with one dependent and
/// no continuity.
pub struct ClientProfileBuilder {
    age: u8,
    district: District,
    sex: Sex,
    dependent_count: u8,
    has_continuity: bool,
}

impl Default for ClientProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientProfileBuilder {
    pub fn new() -> Self {
        Self {
            age: 30,
            district: District::new("Miraflores"),
            sex: Sex::Male,
            dependent_count: 1,
            has_continuity: false,
        }
    }

    pub fn with_age(mut self, age: u8) -> Self {
        self.age = age;
        self
    }

    pub fn with_district(mut self, district: &str) -> Self {
        self.district = District::new(district);
        self
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    pub fn with_dependents(mut self, count: u8) -> Self {
        self.dependent_count = count;
        self
    }

    pub fn with_continuity(mut self) -> Self {
        self.has_continuity = true;
        self
    }

    pub fn build(self) -> ClientProfile {
        ClientProfile::new(
            self.age,
            self.district,
            self.sex,
            self.dependent_count,
            self.has_continuity,
        )
        .expect("builder produced an invalid profile")
    }
}

/// Builder for [`Campaign`] test data
///
/// Defaults to a general campaign active around the fixture quoting
/// date with no discounts.
pub struct CampaignBuilder {
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    kind: CampaignKind,
    discounts: Vec<(PlanCode, Decimal)>,
}

impl Default for CampaignBuilder {
    fn default() -> Self {
        Self::new("Test campaign")
    }
}

impl CampaignBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let as_of = fixtures::as_of();
        Self {
            name: name.into(),
            start_date: as_of - chrono::Duration::days(30),
            end_date: as_of + chrono::Duration::days(30),
            kind: CampaignKind::General,
            discounts: Vec::new(),
        }
    }

    pub fn with_window(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn continuity(mut self) -> Self {
        self.kind = CampaignKind::Continuity;
        self
    }

    pub fn with_discount(mut self, plan: PlanCode, pct: Decimal) -> Self {
        self.discounts.push((plan, pct));
        self
    }

    pub fn build(self) -> Campaign {
        Campaign::new(
            self.name,
            self.start_date,
            self.end_date,
            self.kind,
            self.discounts.into_iter().collect(),
        )
        .expect("builder produced an invalid campaign")
    }
}

/// Builder for small hand-rolled [`RateTable`]s
pub struct RateTableBuilder {
    currency: Currency,
    rows: Vec<RateRow>,
}

impl Default for RateTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RateTableBuilder {
    pub fn new() -> Self {
        Self {
            currency: Currency::PEN,
            rows: Vec::new(),
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Adds a row; `None` cells model plan columns without a published
    /// premium in the band
    pub fn with_row(mut self, band: &str, cells: &[(PlanCode, Option<Decimal>)]) -> Self {
        self.rows.push(RateRow {
            band: band.to_string(),
            rates: cells.iter().copied().collect(),
        });
        self
    }

    pub fn build(self) -> RateTable {
        RateTable::new(self.currency, self.rows).expect("builder produced an invalid tariff")
    }
}
