//! Recommendation and eligibility tests
//!
//! Covers the district/sex/age/dependents decision table, the age
//! ceilings with continuity relaxation, fallback substitution, and
//! alternative-plan derivation.

use domain_quoting::{
    alternatives, recommend_plan, validate_eligibility, Eligibility, PlanCode, QuoteService, Sex,
};
use test_utils::ClientProfileBuilder;

mod decision_table {
    use super::*;

    #[test]
    fn test_tier_a_males_split_at_30() {
        for district in ["Miraflores", "San Isidro", "La Molina", "Santiago de Surco"] {
            let senior = ClientProfileBuilder::new()
                .with_district(district)
                .with_age(35)
                .build();
            let junior = ClientProfileBuilder::new()
                .with_district(district)
                .with_age(25)
                .build();
            assert_eq!(recommend_plan(&senior), PlanCode::MNAC, "{district} at 35");
            assert_eq!(recommend_plan(&junior), PlanCode::MSLD, "{district} at 25");
        }
    }

    #[test]
    fn test_tier_a_females_split_strictly_above_30() {
        let at_30 = ClientProfileBuilder::new()
            .with_district("San Isidro")
            .with_sex(Sex::Female)
            .with_age(30)
            .build();
        let at_31 = ClientProfileBuilder::new()
            .with_district("San Isidro")
            .with_sex(Sex::Female)
            .with_age(31)
            .build();
        assert_eq!(recommend_plan(&at_30), PlanCode::MSLD);
        assert_eq!(recommend_plan(&at_31), PlanCode::MNAC);
    }

    #[test]
    fn test_tier_b_females_split_on_dependents() {
        let base = || {
            ClientProfileBuilder::new()
                .with_district("San Juan de Miraflores")
                .with_sex(Sex::Female)
                .with_age(28)
        };
        assert_eq!(recommend_plan(&base().with_dependents(2).build()), PlanCode::MSLD);
        assert_eq!(recommend_plan(&base().with_dependents(1).build()), PlanCode::AM15);
    }

    #[test]
    fn test_tier_b_males_split_strictly_above_35() {
        let base = || ClientProfileBuilder::new().with_district("Los Olivos");
        assert_eq!(recommend_plan(&base().with_age(36).build()), PlanCode::MSLD);
        assert_eq!(recommend_plan(&base().with_age(35).build()), PlanCode::AM15);
    }

    #[test]
    fn test_default_district_females_need_age_and_dependents() {
        let base = || {
            ClientProfileBuilder::new()
                .with_district("San Borja")
                .with_sex(Sex::Female)
        };
        assert_eq!(
            recommend_plan(&base().with_age(35).with_dependents(3).build()),
            PlanCode::MSLD
        );
        assert_eq!(
            recommend_plan(&base().with_age(25).with_dependents(1).build()),
            PlanCode::AM15
        );
    }

    #[test]
    fn test_default_district_males_split_at_30() {
        let base = || ClientProfileBuilder::new().with_district("Magdalena del Mar");
        assert_eq!(recommend_plan(&base().with_age(29).build()), PlanCode::AM15);
        assert_eq!(recommend_plan(&base().with_age(30).build()), PlanCode::MSLD);
    }

    #[test]
    fn test_unrecognized_district_uses_default_rules() {
        let profile = ClientProfileBuilder::new()
            .with_district("Carabayllo")
            .with_age(45)
            .build();
        assert_eq!(recommend_plan(&profile), PlanCode::MSLD);
    }

    #[test]
    fn test_district_matching_ignores_case_and_diacritics() {
        let plain = ClientProfileBuilder::new()
            .with_district("santiago de surco")
            .with_age(40)
            .build();
        assert_eq!(recommend_plan(&plain), PlanCode::MNAC);
    }

    #[test]
    fn test_recommendation_always_lands_in_catalog() {
        for district in ["Miraflores", "Los Olivos", "Pueblo Libre", "Otro"] {
            for sex in [Sex::Male, Sex::Female] {
                for age in 18..=90u8 {
                    for dependents in [1, 2, 5] {
                        let profile = ClientProfileBuilder::new()
                            .with_district(district)
                            .with_sex(sex)
                            .with_age(age)
                            .with_dependents(dependents)
                            .build();
                        let plan = recommend_plan(&profile);
                        assert!(
                            PlanCode::ALL.contains(&plan),
                            "{district} {sex:?} {age} {dependents}"
                        );
                    }
                }
            }
        }
    }
}

mod eligibility_checks {
    use super::*;

    #[test]
    fn test_am15_ceiling_without_continuity() {
        assert_eq!(
            validate_eligibility(PlanCode::AM15, 61, false),
            Eligibility::Invalid { max_age: 60 }
        );
        assert_eq!(
            validate_eligibility(PlanCode::AM15, 61, true),
            Eligibility::Valid
        );
    }

    #[test]
    fn test_standard_plan_ceiling_without_continuity() {
        assert_eq!(
            validate_eligibility(PlanCode::MNAC, 66, false),
            Eligibility::Invalid { max_age: 65 }
        );
        assert_eq!(
            validate_eligibility(PlanCode::MNAC, 65, false),
            Eligibility::Valid
        );
    }
}

mod recommendation_service {
    use super::*;

    #[test]
    fn test_service_returns_ranked_alternatives() {
        let service = QuoteService::new();
        let profile = ClientProfileBuilder::new().with_age(35).build();

        let rec = service.recommend(&profile).unwrap();
        assert_eq!(rec.plan, PlanCode::MNAC);
        assert_eq!(rec.replaced, None);
        assert_eq!(rec.second_option, Some(PlanCode::MSLD));
        assert_eq!(rec.third_option, Some(PlanCode::AM15));
    }

    #[test]
    fn test_service_keeps_eligible_senior_recommendation() {
        // Tier-B male at 61 draws MSLD, whose ceiling of 65 still
        // accepts him, so no substitution happens
        let service = QuoteService::new();
        let profile = ClientProfileBuilder::new()
            .with_district("Los Olivos")
            .with_age(61)
            .build();

        let rec = service.recommend(&profile).unwrap();
        assert_eq!(rec.plan, PlanCode::MSLD);
        assert_eq!(rec.replaced, None);
    }

    #[test]
    fn test_service_substitution_records_original_plan() {
        // Tier-C female at 61 with one dependent draws AM15
        let service = QuoteService::new();
        let profile = ClientProfileBuilder::new()
            .with_district("Pueblo Libre")
            .with_sex(Sex::Female)
            .with_age(61)
            .build();

        let rec = service.recommend(&profile).unwrap();
        assert_eq!(rec.replaced, Some(PlanCode::AM15));
        assert_eq!(rec.plan, PlanCode::AM05);
    }

    #[test]
    fn test_alternatives_filtered_by_age() {
        let (second, third) = alternatives(PlanCode::MSLD, 62, false);
        // AM15 (60) drops out; AM05 and MNAC survive at 62
        assert_eq!(second, Some(PlanCode::AM05));
        assert_eq!(third, Some(PlanCode::MNAC));
    }
}
