//! Quoting Domain
//!
//! This crate implements the quoting and eligibility engine for the
//! integral health product line: plan recommendation from demographic
//! rules, age eligibility with continuity relaxation and fallback
//! substitution, tariff lookup by age band, campaign discount
//! resolution, and fixed-payment installment financing.
//!
//! # Architecture
//!
//! The engine is a pure, stateless domain layer. Rate and campaign
//! tables are injected by the (external) loading collaborator and
//! treated as immutable; every operation is a plain function of its
//! arguments, safe to run on any number of threads sharing the same
//! tables.
//!
//! ```text
//! recommend_plan -> validate_eligibility (may substitute)
//!                -> price_quote: per insured, base_rate + resolve discount
//!                -> installment: financing schedule for the total
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_quoting::{ClientProfile, District, QuoteService, Sex};
//!
//! let service = QuoteService::new();
//! let profile = ClientProfile::new(35, District::new("Miraflores"), Sex::Male, 2, false)?;
//! let recommendation = service.recommend(&profile)?;
//! let quote = service.price_quote(
//!     &roster, recommendation.plan, profile.has_continuity,
//!     today, &rates, &campaigns, 12, annual_rate,
//! )?;
//! ```

pub mod campaign;
pub mod client;
pub mod eligibility;
pub mod error;
pub mod payment;
pub mod plan;
pub mod quote;
pub mod rates;
pub mod recommendation;
pub mod services;

pub use campaign::{Campaign, CampaignKind, CampaignTable, DiscountOutcome};
pub use client::{ClientProfile, District, Insured, Relation, Sex, Tier};
pub use eligibility::{validate as validate_eligibility, Eligibility};
pub use error::QuoteError;
pub use payment::{amortization_schedule, installment, AmortizationEntry};
pub use plan::{PlanCode, UnknownPlanCode};
pub use quote::{Quote, QuoteLineItem};
pub use rates::{band_label, RateMiss, RateRow, RateTable};
pub use recommendation::{alternatives, recommend_plan};
pub use services::{QuoteService, Recommendation};
