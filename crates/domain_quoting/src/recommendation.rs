//! Plan recommendation rules
//!
//! The district/sex/age/dependents decision table is expressed as an
//! ordered list of named, guarded rules with a first-hit policy. Each
//! rule is independently addressable so the policy can be audited and
//! tested rule by rule instead of through nested conditionals.

use crate::client::{ClientProfile, Sex, Tier};
use crate::eligibility;
use crate::plan::PlanCode;

/// One guarded rule of the recommendation decision table
pub struct PlanRule {
    /// Stable rule name for audit output
    pub name: &'static str,
    /// Guard; evaluated against the profile in table order
    pub matches: fn(&ClientProfile) -> bool,
    /// Plan emitted when the guard holds
    pub plan: PlanCode,
}

/// Plan emitted if no rule matches; the terminal rules make the table
/// total, so this is never reached for a valid profile
const DEFAULT_PLAN: PlanCode = PlanCode::MSLD;

/// The decision table, first hit wins
///
/// Within each tier the sex-specific threshold rules come first and a
/// terminal rule per sex closes the branch.
pub const DECISION_RULES: &[PlanRule] = &[
    // Tier A: premium districts
    PlanRule {
        name: "tier_a_male_30_plus",
        matches: |p| p.district.tier() == Tier::A && p.sex == Sex::Male && p.age >= 30,
        plan: PlanCode::MNAC,
    },
    PlanRule {
        name: "tier_a_male",
        matches: |p| p.district.tier() == Tier::A && p.sex == Sex::Male,
        plan: PlanCode::MSLD,
    },
    PlanRule {
        name: "tier_a_female_over_30",
        matches: |p| p.district.tier() == Tier::A && p.sex == Sex::Female && p.age > 30,
        plan: PlanCode::MNAC,
    },
    PlanRule {
        name: "tier_a_female",
        matches: |p| p.district.tier() == Tier::A && p.sex == Sex::Female,
        plan: PlanCode::MSLD,
    },
    // Tier B: high-volume districts
    PlanRule {
        name: "tier_b_female_two_plus_dependents",
        matches: |p| {
            p.district.tier() == Tier::B && p.sex == Sex::Female && p.dependent_count >= 2
        },
        plan: PlanCode::MSLD,
    },
    PlanRule {
        name: "tier_b_female",
        matches: |p| p.district.tier() == Tier::B && p.sex == Sex::Female,
        plan: PlanCode::AM15,
    },
    PlanRule {
        name: "tier_b_male_over_35",
        matches: |p| p.district.tier() == Tier::B && p.sex == Sex::Male && p.age > 35,
        plan: PlanCode::MSLD,
    },
    PlanRule {
        name: "tier_b_male",
        matches: |p| p.district.tier() == Tier::B && p.sex == Sex::Male,
        plan: PlanCode::AM15,
    },
    // Tier C: all remaining districts
    PlanRule {
        name: "tier_c_female_over_30_two_plus_dependents",
        matches: |p| {
            p.district.tier() == Tier::C
                && p.sex == Sex::Female
                && p.age > 30
                && p.dependent_count >= 2
        },
        plan: PlanCode::MSLD,
    },
    PlanRule {
        name: "tier_c_female",
        matches: |p| p.district.tier() == Tier::C && p.sex == Sex::Female,
        plan: PlanCode::AM15,
    },
    PlanRule {
        name: "tier_c_male_under_30",
        matches: |p| p.district.tier() == Tier::C && p.sex == Sex::Male && p.age < 30,
        plan: PlanCode::AM15,
    },
    PlanRule {
        name: "tier_c_male",
        matches: |p| p.district.tier() == Tier::C && p.sex == Sex::Male,
        plan: PlanCode::MSLD,
    },
];

/// Returns the first rule whose guard holds for the profile
pub fn matching_rule(profile: &ClientProfile) -> Option<&'static PlanRule> {
    DECISION_RULES.iter().find(|rule| (rule.matches)(profile))
}

/// Recommends the primary plan for a client profile
///
/// Pure function over the profile; eligibility is checked separately
/// and may override the result (see [`crate::services::QuoteService`]).
pub fn recommend_plan(profile: &ClientProfile) -> PlanCode {
    matching_rule(profile)
        .map(|rule| rule.plan)
        .unwrap_or(DEFAULT_PLAN)
}

/// Ordered alternate candidates per primary plan
const ALTERNATES: &[(PlanCode, [PlanCode; 3])] = &[
    (PlanCode::MNAC, [PlanCode::MSLD, PlanCode::AM15, PlanCode::MINT]),
    (PlanCode::MSLD, [PlanCode::AM15, PlanCode::AM05, PlanCode::MNAC]),
    (PlanCode::AM15, [PlanCode::AM17, PlanCode::AM05, PlanCode::MSLD]),
    (PlanCode::MINT, [PlanCode::MNAC, PlanCode::MSLD, PlanCode::AM05]),
];

/// Candidates for any primary plan without its own adjacency entry
const DEFAULT_ALTERNATES: [PlanCode; 3] = [PlanCode::MSLD, PlanCode::AM15, PlanCode::AM05];

/// Derives the second and third plan options from the primary plan
///
/// Candidates come from a fixed adjacency table and are filtered
/// through the eligibility check (continuity passes everything); the
/// first two survivors are returned, either possibly absent.
pub fn alternatives(
    primary: PlanCode,
    age: u8,
    has_continuity: bool,
) -> (Option<PlanCode>, Option<PlanCode>) {
    let candidates = ALTERNATES
        .iter()
        .find(|(plan, _)| *plan == primary)
        .map(|(_, alts)| *alts)
        .unwrap_or(DEFAULT_ALTERNATES);

    let mut surviving = candidates
        .into_iter()
        .filter(|candidate| eligibility::validate(*candidate, age, has_continuity).is_valid());

    (surviving.next(), surviving.next())
}
