use super::common::*;
use crate::matching::domain::{PolicyRecord, PolicyType, UserProfile};
use crate::matching::explain::{explain, EligibilityExplanation};

fn bucket_count(explanation: &EligibilityExplanation, needle: &str) -> usize {
    let passed = explanation
        .passed_conditions
        .iter()
        .filter(|msg| msg.contains(needle))
        .count();
    let failed = explanation
        .failed_conditions
        .iter()
        .filter(|msg| msg.contains(needle))
        .count();
    let missing = explanation
        .missing_info
        .iter()
        .filter(|msg| msg.contains(needle))
        .count();
    passed + failed + missing
}

#[test]
fn eligible_profile_collects_only_passes() {
    let explanation = explain(&didimdol(), &young_buyer());

    assert!(explanation.is_eligible);
    assert!(explanation.failed_conditions.is_empty());
    assert!(explanation.missing_info.is_empty());
    assert!(explanation
        .passed_conditions
        .iter()
        .any(|msg| msg.contains("소득")));
    assert!(explanation
        .passed_conditions
        .iter()
        .any(|msg| msg.contains("생애최초")));
}

#[test]
fn income_over_cap_fails_with_message() {
    let profile = UserProfile {
        annual_income: Some(70_000_000),
        ..young_buyer()
    };

    let explanation = explain(&didimdol(), &profile);

    assert!(!explanation.is_eligible);
    assert!(explanation
        .failed_conditions
        .iter()
        .any(|msg| msg.contains("연소득") && msg.contains("60,000,000")));
}

#[test]
fn missing_age_is_reported_not_failed() {
    let policy = PolicyRecord {
        age_min: Some(19),
        age_max: Some(39),
        ..policy("youth-only", PolicyType::RentalHousing)
    };
    let profile = UserProfile {
        annual_income: Some(40_000_000),
        ..UserProfile::default()
    };

    let explanation = explain(&policy, &profile);

    assert!(explanation.is_eligible);
    assert!(explanation.missing_info.iter().any(|msg| msg.contains("나이")));
    assert!(!explanation
        .failed_conditions
        .iter()
        .any(|msg| msg.contains("나이")));
}

#[test]
fn age_below_minimum_fails() {
    let policy = PolicyRecord {
        age_min: Some(19),
        age_max: Some(39),
        ..policy("youth-only", PolicyType::RentalHousing)
    };
    let profile = UserProfile {
        age: Some(17),
        ..UserProfile::default()
    };

    let explanation = explain(&policy, &profile);
    assert!(!explanation.is_eligible);
    assert!(explanation
        .failed_conditions
        .iter()
        .any(|msg| msg.contains("최소 나이 19세")));
}

#[test]
fn every_hard_condition_lands_in_exactly_one_bucket() {
    let policies = [
        didimdol(),
        policy("unbounded", PolicyType::GuaranteeInsurance),
        PolicyRecord {
            age_min: Some(19),
            age_max: Some(34),
            income_max: Some(36_000_000),
            ..policy("youth-account", PolicyType::Subscription)
        },
    ];
    let profiles = [
        young_buyer(),
        UserProfile::default(),
        UserProfile {
            age: Some(50),
            annual_income: Some(200_000_000),
            is_first_time_buyer: Some(false),
            ..UserProfile::default()
        },
    ];

    for policy in &policies {
        for profile in &profiles {
            let explanation = explain(policy, profile);
            assert_eq!(bucket_count(&explanation, "나이"), 1, "age bucket");
            // "소득" covers the pass ("소득 조건 충족"), fail ("연소득 ...
            // 필요"), and missing ("연소득 정보 필요") messages alike.
            assert_eq!(bucket_count(&explanation, "소득"), 1, "income bucket");
            assert_eq!(
                bucket_count(&explanation, "생애최초"),
                1,
                "first-time bucket"
            );
        }
    }
}

#[test]
fn unknown_first_time_status_is_missing_info_for_restricted_policy() {
    let profile = UserProfile {
        is_first_time_buyer: None,
        ..young_buyer()
    };

    let explanation = explain(&didimdol(), &profile);
    assert!(explanation
        .missing_info
        .iter()
        .any(|msg| msg.contains("생애최초")));
    // The explainer asks for the missing input; the hard filter still lets
    // the policy through.
    assert!(explanation.is_eligible);
}

#[test]
fn priority_conditions_only_ever_add_passes() {
    let mut subject = didimdol();
    subject.newlywed_priority = true;
    subject.multi_child_benefit = true;

    let with_traits = UserProfile {
        is_newlywed: Some(true),
        has_multiple_children: Some(true),
        ..young_buyer()
    };
    let explanation = explain(&subject, &with_traits);
    assert!(explanation
        .passed_conditions
        .iter()
        .any(|msg| msg.contains("신혼부부")));
    assert!(explanation
        .passed_conditions
        .iter()
        .any(|msg| msg.contains("다자녀")));

    let without_traits = UserProfile {
        is_newlywed: Some(false),
        has_multiple_children: Some(false),
        ..young_buyer()
    };
    let explanation = explain(&subject, &without_traits);
    assert!(explanation.is_eligible);
    assert_eq!(bucket_count(&explanation, "신혼부부"), 0);
    assert_eq!(bucket_count(&explanation, "다자녀"), 0);
}
