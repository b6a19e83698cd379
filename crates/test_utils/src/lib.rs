//! Shared test utilities for the quoting system test suite
//!
//! Provides a canonical tariff and campaign set mirroring the shape of
//! the production tables, plus builders so tests specify only the
//! fields they care about.

pub mod builders;
pub mod fixtures;

pub use builders::{CampaignBuilder, ClientProfileBuilder, RateTableBuilder};
pub use fixtures::{as_of, family_roster, standard_campaigns, standard_rate_table};
