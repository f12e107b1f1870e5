use serde::{Deserialize, Serialize};

use super::domain::{PolicyRecord, PolicyType, UserProfile};

/// Units of 100M KRW used to reward higher loan limits.
const LOAN_LIMIT_UNIT: i64 = 100_000_000;

/// One ranked policy from a filter+rank pass. Lower score ranks first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub policy: PolicyRecord,
    pub priority_score: i64,
}

/// Composite priority score; pure function of the (policy, profile) pair.
///
/// Starts from a base keyed on the program type, subtracts bonuses where the
/// profile matches one of the policy's preference flags, rewards larger loan
/// limits, and penalizes higher interest rates.
pub fn priority_score(policy: &PolicyRecord, profile: &UserProfile) -> i64 {
    let mut score = match policy.policy_type {
        PolicyType::JeonseLoan => 1,
        PolicyType::PurchaseLoan => 2,
        PolicyType::RentalHousing => 3,
        PolicyType::Subscription => 4,
        PolicyType::GuaranteeInsurance => 5,
        _ => 10,
    };

    if policy.newlywed_priority && profile.is_newlywed == Some(true) {
        score -= 5;
    }

    if policy.multi_child_benefit && profile.has_multiple_children == Some(true) {
        score -= 3;
    }

    if policy.first_time_buyer_only && profile.is_first_time_buyer == Some(true) {
        score -= 2;
    }

    if let Some(loan_limit) = policy.loan_limit {
        score -= loan_limit / LOAN_LIMIT_UNIT;
    }

    if let Some(rate) = policy.interest_rate {
        score += (rate * 2.0).round() as i64;
    }

    score
}

/// Order an already-filtered policy set from most to least relevant.
///
/// The sort is stable, so tied scores keep catalog order and repeated calls
/// over the same inputs produce the same ordering.
pub fn rank(policies: Vec<PolicyRecord>, profile: &UserProfile) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = policies
        .into_iter()
        .map(|policy| {
            let priority_score = priority_score(&policy, profile);
            MatchResult {
                policy,
                priority_score,
            }
        })
        .collect();

    results.sort_by_key(|result| result.priority_score);
    results
}
