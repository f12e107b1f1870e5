use std::collections::BTreeSet;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::matching::catalog::InMemoryPolicyCatalog;
use crate::matching::domain::{
    PolicyCategory, PolicyCode, PolicyRecord, PolicyType, Region, UserProfile,
};
use crate::matching::seed::government_policies;
use crate::matching::service::{MatchingConfig, PolicyMatchService};

pub(super) fn policy(code: &str, policy_type: PolicyType) -> PolicyRecord {
    PolicyRecord {
        code: PolicyCode::new(code),
        name: code.to_string(),
        policy_type,
        category: PolicyCategory::General,
        description: String::new(),
        age_min: None,
        age_max: None,
        income_min: None,
        income_max: None,
        asset_limit: None,
        first_time_buyer_only: false,
        newlywed_priority: false,
        multi_child_benefit: false,
        available_regions: BTreeSet::new(),
        excluded_regions: BTreeSet::new(),
        loan_limit: None,
        interest_rate: None,
        loan_period_max: None,
        application_url: None,
        required_documents: Vec::new(),
        contact_info: None,
        is_active: true,
        start_date: None,
        end_date: None,
    }
}

/// The purchase-loan program used throughout the concrete scenarios:
/// income cap 60M KRW, 250M KRW limit at 3.2% over up to 40 years,
/// first-time buyers only.
pub(super) fn didimdol() -> PolicyRecord {
    PolicyRecord {
        income_max: Some(60_000_000),
        asset_limit: Some(335_000_000),
        loan_limit: Some(250_000_000),
        interest_rate: Some(3.2),
        loan_period_max: Some(40),
        first_time_buyer_only: true,
        ..policy("didimdol-loan", PolicyType::PurchaseLoan)
    }
}

pub(super) fn young_buyer() -> UserProfile {
    UserProfile {
        age: Some(29),
        annual_income: Some(55_000_000),
        is_first_time_buyer: Some(true),
        budget_max: Some(300_000_000),
        ..UserProfile::default()
    }
}

pub(super) fn seeded_service() -> PolicyMatchService<InMemoryPolicyCatalog> {
    let catalog = Arc::new(InMemoryPolicyCatalog::new());
    catalog
        .seed_if_empty(government_policies())
        .expect("seed catalog");
    PolicyMatchService::new(catalog, MatchingConfig::default())
}

pub(super) fn regions(list: &[Region]) -> BTreeSet<Region> {
    list.iter().copied().collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
