//! Quoting domain services
//!
//! [`QuoteService`] composes the recommendation rules, the eligibility
//! check, the tariff, the campaign table, and the installment
//! calculator into the two operations the surrounding layers call:
//! recommending a plan for a profile and pricing a quote for a roster.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use core_kernel::{Money, Rate};

use crate::campaign::CampaignTable;
use crate::client::{ClientProfile, Insured, Relation};
use crate::eligibility::{self, Eligibility};
use crate::error::QuoteError;
use crate::payment;
use crate::plan::PlanCode;
use crate::quote::{Quote, QuoteLineItem};
use crate::rates::RateTable;
use crate::recommendation;

/// A plan recommendation with ranked alternatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// The plan to offer, after any eligibility substitution
    pub plan: PlanCode,
    /// The originally recommended plan when eligibility forced a
    /// substitution
    pub replaced: Option<PlanCode>,
    pub second_option: Option<PlanCode>,
    pub third_option: Option<PlanCode>,
}

/// Stateless service for plan recommendation and quote pricing
///
/// All state lives in the arguments; the service itself can be shared
/// freely across threads and requests.
#[derive(Debug, Default)]
pub struct QuoteService;

impl QuoteService {
    pub fn new() -> Self {
        Self
    }

    /// Recommends a plan for a client profile
    ///
    /// Applies the decision table, validates the result against the
    /// client's age and continuity, substitutes the first eligible
    /// fallback plan when the recommendation is rejected, and derives
    /// the ranked alternatives from whichever plan survives.
    pub fn recommend(&self, profile: &ClientProfile) -> Result<Recommendation, QuoteError> {
        let primary = recommendation::recommend_plan(profile);

        let (plan, replaced) =
            match eligibility::validate(primary, profile.age, profile.has_continuity) {
                Eligibility::Valid => (primary, None),
                Eligibility::Invalid { max_age } => {
                    let substitute =
                        eligibility::fallback_plan(profile.age, profile.has_continuity)?;
                    debug!(
                        %primary,
                        %substitute,
                        age = profile.age,
                        max_age,
                        "Recommended plan rejected on age, substituting fallback"
                    );
                    (substitute, Some(primary))
                }
            };

        let (second_option, third_option) =
            recommendation::alternatives(plan, profile.age, profile.has_continuity);

        Ok(Recommendation {
            plan,
            replaced,
            second_option,
            third_option,
        })
    }

    /// Prices a quote for a roster of insureds on a selected plan
    ///
    /// Each insured is priced off the tariff band for their age and
    /// relation; the campaign discount is resolved with the same
    /// continuity flag for everyone, because continuity is a property
    /// of the policyholder's relationship with the insurer. A tariff
    /// miss excludes that insured from the total and records a warning
    /// on the line item instead of failing the quote.
    #[allow(clippy::too_many_arguments)]
    pub fn price_quote(
        &self,
        insureds: &[Insured],
        plan: PlanCode,
        has_continuity: bool,
        as_of: NaiveDate,
        rates: &RateTable,
        campaigns: &CampaignTable,
        installment_count: u32,
        annual_interest_rate: Rate,
    ) -> Result<Quote, QuoteError> {
        validate_roster(insureds)?;
        if installment_count == 0 {
            return Err(QuoteError::validation(
                "Installment count must be at least 1",
            ));
        }

        let currency = rates.currency();
        let mut total = Money::zero(currency);
        let mut line_items = Vec::with_capacity(insureds.len());

        for insured in insureds {
            let is_child = insured.relation == Relation::Child;
            match rates.base_rate(plan, insured.age, is_child) {
                Err(miss) => {
                    warn!(
                        %plan,
                        age = insured.age,
                        relation = ?insured.relation,
                        %miss,
                        "No tariff rate for insured, excluding from total"
                    );
                    line_items.push(QuoteLineItem::missing(insured.clone(), miss.to_string()));
                }
                Ok(base_rate) => {
                    let outcome =
                        campaigns.resolve(plan, base_rate, as_of, has_continuity);
                    total = total.checked_add(&outcome.final_rate)?;
                    line_items.push(QuoteLineItem {
                        insured: insured.clone(),
                        base_rate: Some(base_rate),
                        discount_pct: outcome.discount_pct,
                        final_rate: Some(outcome.final_rate),
                        campaign: outcome.campaign,
                        warning: None,
                    });
                }
            }
        }

        let installment_amount =
            payment::installment(total, annual_interest_rate, installment_count)?;

        Ok(Quote {
            line_items,
            total_annual_premium: total,
            installment_count,
            annual_interest_rate,
            installment_amount,
        })
    }
}

/// Roster invariants: non-empty, the policyholder leads, and there is
/// exactly one of them
fn validate_roster(insureds: &[Insured]) -> Result<(), QuoteError> {
    let first = insureds
        .first()
        .ok_or_else(|| QuoteError::validation("Quote requires at least one insured"))?;

    if first.relation != Relation::PolicyHolder {
        return Err(QuoteError::validation(
            "The policyholder must be the first insured",
        ));
    }

    let holders = insureds
        .iter()
        .filter(|i| i.relation == Relation::PolicyHolder)
        .count();
    if holders != 1 {
        return Err(QuoteError::validation(format!(
            "Quote requires exactly one policyholder, found {holders}"
        )));
    }

    if let Some(out_of_range) = insureds.iter().find(|i| i.age > 100) {
        return Err(QuoteError::validation(format!(
            "Insured age {} is outside the allowed range 0-100",
            out_of_range.age
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{District, Sex};

    fn profile(age: u8, continuity: bool) -> ClientProfile {
        ClientProfile::new(age, District::new("Miraflores"), Sex::Male, 1, continuity).unwrap()
    }

    #[test]
    fn test_recommend_keeps_eligible_primary() {
        let service = QuoteService::new();
        let rec = service.recommend(&profile(35, false)).unwrap();
        assert_eq!(rec.plan, PlanCode::MNAC);
        assert_eq!(rec.replaced, None);
        assert_eq!(rec.second_option, Some(PlanCode::MSLD));
        assert_eq!(rec.third_option, Some(PlanCode::AM15));
    }

    #[test]
    fn test_recommend_substitutes_on_age_rejection() {
        // Tier-C female at 61 with one dependent draws AM15, whose
        // ceiling is 60; AM05 is the first fallback that accepts 61
        let service = QuoteService::new();
        let p = ClientProfile::new(61, District::new("San Borja"), Sex::Female, 1, false).unwrap();
        let rec = service.recommend(&p).unwrap();
        assert_eq!(rec.plan, PlanCode::AM05);
        assert_eq!(rec.replaced, Some(PlanCode::AM15));
    }

    #[test]
    fn test_recommend_exhausted_fallback_is_configuration_error() {
        // 66 fails MNAC's ceiling; with continuity absent the fallback
        // list is also exhausted, so this surfaces as configuration
        let service = QuoteService::new();
        let err = service.recommend(&profile(66, false)).unwrap_err();
        assert!(matches!(err, QuoteError::Configuration(_)));
    }

    #[test]
    fn test_recommend_with_continuity_never_substitutes() {
        let service = QuoteService::new();
        let rec = service.recommend(&profile(66, true)).unwrap();
        assert_eq!(rec.plan, PlanCode::MNAC);
        assert_eq!(rec.replaced, None);
    }

    #[test]
    fn test_roster_must_not_be_empty() {
        let err = validate_roster(&[]).unwrap_err();
        assert!(matches!(err, QuoteError::Validation(_)));
    }

    #[test]
    fn test_roster_policyholder_must_lead() {
        let roster = [Insured::spouse(30), Insured::policy_holder(35)];
        let err = validate_roster(&roster).unwrap_err();
        assert!(matches!(err, QuoteError::Validation(_)));
    }

    #[test]
    fn test_roster_rejects_second_policyholder() {
        let roster = [Insured::policy_holder(35), Insured::policy_holder(30)];
        let err = validate_roster(&roster).unwrap_err();
        assert!(matches!(err, QuoteError::Validation(_)));
    }

    #[test]
    fn test_roster_rejects_age_above_100() {
        let roster = [Insured::policy_holder(35), Insured::other(101)];
        let err = validate_roster(&roster).unwrap_err();
        assert!(matches!(err, QuoteError::Validation(_)));
    }
}
