use serde::{Deserialize, Serialize};

use super::domain::{format_krw, PolicyRecord, UserProfile};

/// Per-condition pass/fail/missing breakdown for one (policy, profile) pair.
///
/// Purely descriptive: hard-condition failures flip `is_eligible`, missing
/// inputs are reported as data rather than raised, and priority-only
/// conditions can only ever add informational passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityExplanation {
    pub is_eligible: bool,
    pub passed_conditions: Vec<String>,
    pub failed_conditions: Vec<String>,
    pub missing_info: Vec<String>,
}

/// Evaluate every explainable condition for the pair.
///
/// Each of the age, income, and first-time-buyer conditions lands in exactly
/// one of the three buckets. Newlywed and multi-child conditions are
/// non-disqualifying and appear only as passes.
pub fn explain(policy: &PolicyRecord, profile: &UserProfile) -> EligibilityExplanation {
    let mut result = EligibilityExplanation {
        is_eligible: true,
        ..EligibilityExplanation::default()
    };

    match profile.age {
        Some(age) => {
            if let Some(min) = policy.age_min.filter(|min| age < *min) {
                result
                    .failed_conditions
                    .push(format!("최소 나이 {min}세 이상 필요 (현재: {age}세)"));
                result.is_eligible = false;
            } else if let Some(max) = policy.age_max.filter(|max| age > *max) {
                result
                    .failed_conditions
                    .push(format!("최대 나이 {max}세 이하 필요 (현재: {age}세)"));
                result.is_eligible = false;
            } else {
                result.passed_conditions.push("나이 조건 충족".to_string());
            }
        }
        None => result.missing_info.push("나이 정보 필요".to_string()),
    }

    match profile.annual_income {
        Some(income) => {
            if let Some(min) = policy.income_min.filter(|min| income < *min) {
                result
                    .failed_conditions
                    .push(format!("최소 연소득 {}원 이상 필요", format_krw(min)));
                result.is_eligible = false;
            } else if let Some(max) = policy.income_max.filter(|max| income > *max) {
                result
                    .failed_conditions
                    .push(format!("최대 연소득 {}원 이하 필요", format_krw(max)));
                result.is_eligible = false;
            } else {
                result.passed_conditions.push("소득 조건 충족".to_string());
            }
        }
        None => result.missing_info.push("연소득 정보 필요".to_string()),
    }

    if policy.first_time_buyer_only {
        match profile.is_first_time_buyer {
            Some(true) => result
                .passed_conditions
                .push("생애최초 구입자 조건 충족".to_string()),
            Some(false) => {
                result
                    .failed_conditions
                    .push("생애최초 구입자만 신청 가능".to_string());
                result.is_eligible = false;
            }
            None => result
                .missing_info
                .push("생애최초 구입 여부 확인 필요".to_string()),
        }
    } else {
        result
            .passed_conditions
            .push("생애최초 구입 제한 없음".to_string());
    }

    if policy.newlywed_priority && profile.is_newlywed == Some(true) {
        result
            .passed_conditions
            .push("신혼부부 우대 조건 충족".to_string());
    }

    if policy.multi_child_benefit && profile.has_multiple_children == Some(true) {
        result
            .passed_conditions
            .push("다자녀 혜택 조건 충족".to_string());
    }

    result
}
