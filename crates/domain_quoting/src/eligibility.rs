//! Age eligibility validation
//!
//! Each plan caps the entry age of clients arriving without continuity.
//! Continuity clients keep their prior-insurer seniority and are never
//! rejected on age. When a recommended plan fails the check the engine
//! substitutes the first plan from a fixed priority list that accepts
//! the client.

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::plan::PlanCode;

/// Entry-age ceiling applied to clients without continuity, if any
pub fn max_entry_age(plan: PlanCode) -> Option<u8> {
    match plan {
        PlanCode::MSLD | PlanCode::MINT | PlanCode::MNAC | PlanCode::AM05 => Some(65),
        PlanCode::AM18 | PlanCode::AM17 | PlanCode::AM15 => Some(60),
        PlanCode::MLSD => None,
    }
}

/// Outcome of an eligibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eligibility {
    Valid,
    /// Age exceeds the plan's ceiling; carries the ceiling for messaging
    Invalid { max_age: u8 },
}

impl Eligibility {
    pub fn is_valid(&self) -> bool {
        matches!(self, Eligibility::Valid)
    }

    /// Converts an invalid verdict into the blocking error surfaced to
    /// the advisor when no fallback substitution applies
    pub fn require(self, plan: PlanCode, age: u8) -> Result<(), QuoteError> {
        match self {
            Eligibility::Valid => Ok(()),
            Eligibility::Invalid { max_age } => {
                Err(QuoteError::Ineligible { plan, age, max_age })
            }
        }
    }
}

/// Checks whether a client of the given age may enter the plan
///
/// Continuity always validates; otherwise the plan's ceiling applies.
/// Plans without a known ceiling are always valid.
pub fn validate(plan: PlanCode, age: u8, has_continuity: bool) -> Eligibility {
    if has_continuity {
        return Eligibility::Valid;
    }
    match max_entry_age(plan) {
        Some(max_age) if age > max_age => Eligibility::Invalid { max_age },
        _ => Eligibility::Valid,
    }
}

/// Substitution order when a recommended plan rejects the client's age
pub const FALLBACK_PRIORITY: [PlanCode; 7] = [
    PlanCode::AM15,
    PlanCode::AM17,
    PlanCode::AM18,
    PlanCode::AM05,
    PlanCode::MSLD,
    PlanCode::MNAC,
    PlanCode::MINT,
];

/// Finds the first plan in the priority list that accepts the client
///
/// Exhausting the list means the ceilings are misconfigured; that is a
/// configuration error, never a silent default.
pub fn fallback_plan(age: u8, has_continuity: bool) -> Result<PlanCode, QuoteError> {
    FALLBACK_PRIORITY
        .iter()
        .copied()
        .find(|plan| validate(*plan, age, has_continuity).is_valid())
        .ok_or_else(|| {
            QuoteError::configuration(format!(
                "No eligible fallback plan for age {age} without continuity"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuity_always_validates() {
        assert_eq!(validate(PlanCode::AM15, 61, true), Eligibility::Valid);
        assert_eq!(validate(PlanCode::MNAC, 90, true), Eligibility::Valid);
    }

    #[test]
    fn test_ceiling_at_60_for_am_plans() {
        for plan in [PlanCode::AM15, PlanCode::AM17, PlanCode::AM18] {
            assert_eq!(validate(plan, 60, false), Eligibility::Valid, "{plan}");
            assert_eq!(
                validate(plan, 61, false),
                Eligibility::Invalid { max_age: 60 },
                "{plan}"
            );
        }
    }

    #[test]
    fn test_ceiling_at_65_for_standard_plans() {
        for plan in [
            PlanCode::MSLD,
            PlanCode::MINT,
            PlanCode::MNAC,
            PlanCode::AM05,
        ] {
            assert_eq!(validate(plan, 65, false), Eligibility::Valid, "{plan}");
            assert_eq!(
                validate(plan, 66, false),
                Eligibility::Invalid { max_age: 65 },
                "{plan}"
            );
        }
    }

    #[test]
    fn test_plan_without_ceiling_always_validates() {
        assert_eq!(validate(PlanCode::MLSD, 90, false), Eligibility::Valid);
    }

    #[test]
    fn test_require_surfaces_blocking_error() {
        let verdict = validate(PlanCode::AM15, 61, false);
        let err = verdict.require(PlanCode::AM15, 61).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::Ineligible {
                plan: PlanCode::AM15,
                age: 61,
                max_age: 60
            }
        ));
    }

    #[test]
    fn test_fallback_prefers_am15_when_young_enough() {
        assert_eq!(fallback_plan(45, false).unwrap(), PlanCode::AM15);
    }

    #[test]
    fn test_fallback_skips_capped_plans_at_61() {
        // 61 exceeds the AM-family ceiling but not the standard one
        assert_eq!(fallback_plan(61, false).unwrap(), PlanCode::AM05);
    }

    #[test]
    fn test_fallback_with_continuity_takes_list_head() {
        assert_eq!(fallback_plan(70, true).unwrap(), PlanCode::AM15);
    }

    #[test]
    fn test_fallback_exhausted_is_configuration_error() {
        // Past every ceiling in the priority list
        let err = fallback_plan(66, false).unwrap_err();
        assert!(matches!(err, QuoteError::Configuration(_)));
    }
}
