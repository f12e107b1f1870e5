use super::domain::{PolicyRecord, UserProfile};

/// Conditions whose failure disqualifies a policy outright.
///
/// Soft preferences (newlywed priority, multi-child benefit) are deliberately
/// absent: they belong to the ranker and must never disqualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardConstraint {
    AgeBound,
    IncomeBound,
    Region,
    FirstTimeBuyer,
    AssetLimit,
}

/// Return the first violated hard constraint, or `None` when the profile may
/// apply to the policy.
///
/// Every check is applied only when the profile carries the relevant field;
/// unknown values can never disqualify. An entirely empty profile therefore
/// passes every policy.
pub fn first_violation(policy: &PolicyRecord, profile: &UserProfile) -> Option<HardConstraint> {
    if let Some(age) = profile.age {
        let below = policy.age_min.is_some_and(|min| age < min);
        let above = policy.age_max.is_some_and(|max| age > max);
        if below || above {
            return Some(HardConstraint::AgeBound);
        }
    }

    if let Some(income) = profile.annual_income {
        let below = policy.income_min.is_some_and(|min| income < min);
        let above = policy.income_max.is_some_and(|max| income > max);
        if below || above {
            return Some(HardConstraint::IncomeBound);
        }
    }

    if let Some(region) = profile.region_preference {
        if !policy.is_nationwide() && !policy.available_regions.contains(&region) {
            return Some(HardConstraint::Region);
        }
        if policy.excluded_regions.contains(&region) {
            return Some(HardConstraint::Region);
        }
    }

    // An unknown first-time-buyer status defaults to eligible; only an
    // explicit `false` disqualifies.
    if policy.first_time_buyer_only && profile.is_first_time_buyer == Some(false) {
        return Some(HardConstraint::FirstTimeBuyer);
    }

    if let (Some(limit), Some(assets)) = (policy.asset_limit, profile.total_assets) {
        if assets > limit {
            return Some(HardConstraint::AssetLimit);
        }
    }

    None
}

pub fn passes_hard_constraints(policy: &PolicyRecord, profile: &UserProfile) -> bool {
    first_violation(policy, profile).is_none()
}

/// Narrow a policy set to those the profile may apply for. Order is preserved
/// from the input; ranking is a separate step.
pub fn eligible_policies(policies: Vec<PolicyRecord>, profile: &UserProfile) -> Vec<PolicyRecord> {
    policies
        .into_iter()
        .filter(|policy| passes_hard_constraints(policy, profile))
        .collect()
}
