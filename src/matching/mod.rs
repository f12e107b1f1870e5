//! Policy eligibility matching engine.
//!
//! The pipeline is: the hard-constraint filter narrows the active catalog,
//! the ranker orders what survives, and callers may additionally request a
//! benefit calculation or a per-condition eligibility breakdown for a chosen
//! program. Hard constraints and ranking-only preferences are kept in
//! separate modules so a ranking flag can never become disqualifying by
//! accident.

pub mod benefit;
pub mod catalog;
pub mod domain;
pub mod explain;
pub mod filter;
pub mod ranking;
pub mod router;
pub mod seed;
pub mod service;

#[cfg(test)]
mod tests;

pub use benefit::{
    calculate_benefit, BenefitCalculation, MarketComparison, DEFAULT_MARKET_RATE,
};
pub use catalog::{CatalogError, InMemoryPolicyCatalog, PolicyCatalog};
pub use domain::{
    PolicyCategory, PolicyCode, PolicyRecord, PolicyType, PolicyValidationError, Region,
    UserProfile,
};
pub use explain::{explain, EligibilityExplanation};
pub use filter::{eligible_policies, first_violation, passes_hard_constraints, HardConstraint};
pub use ranking::{priority_score, rank, MatchResult};
pub use router::policy_router;
pub use seed::government_policies;
pub use service::{MatchingConfig, PolicyMatchService, PolicyServiceError};
