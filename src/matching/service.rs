use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::benefit::{calculate_benefit, BenefitCalculation, DEFAULT_MARKET_RATE};
use super::catalog::{CatalogError, PolicyCatalog};
use super::domain::{PolicyCode, PolicyRecord, UserProfile};
use super::explain::{explain, EligibilityExplanation};
use super::filter::eligible_policies;
use super::ranking::{rank, MatchResult};

/// Tunables for the matching engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Market average lending rate used as the benefit baseline, percent
    /// per annum.
    pub market_rate: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            market_rate: DEFAULT_MARKET_RATE,
        }
    }
}

/// Facade composing the catalog with the filter, ranker, benefit calculator,
/// and explainer. Dependencies are injected once at construction; every
/// operation is a read-only query over the catalog snapshot it fetches.
pub struct PolicyMatchService<C> {
    catalog: Arc<C>,
    config: MatchingConfig,
}

impl<C> PolicyMatchService<C>
where
    C: PolicyCatalog + 'static,
{
    pub fn new(catalog: Arc<C>, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    /// Filter the active catalog down to the policies the profile may apply
    /// for, ranked from most to least relevant.
    pub fn match_policies(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<MatchResult>, PolicyServiceError> {
        let active = self.catalog.active_policies()?;
        let eligible = eligible_policies(active, profile);
        let ranked = rank(eligible, profile);

        info!(count = ranked.len(), "matched applicable policies");
        Ok(ranked)
    }

    /// Exact lookup of one program.
    pub fn policy_details(&self, code: &PolicyCode) -> Result<PolicyRecord, PolicyServiceError> {
        Ok(self.catalog.get(code)?)
    }

    /// Monetary benefit of one program for the profile, with the embedded
    /// eligibility breakdown.
    pub fn benefit(
        &self,
        code: &PolicyCode,
        profile: &UserProfile,
    ) -> Result<BenefitCalculation, PolicyServiceError> {
        let policy = self.catalog.get(code)?;
        Ok(calculate_benefit(&policy, profile, self.config.market_rate))
    }

    /// Standalone eligibility breakdown for one program.
    pub fn eligibility(
        &self,
        code: &PolicyCode,
        profile: &UserProfile,
    ) -> Result<EligibilityExplanation, PolicyServiceError> {
        let policy = self.catalog.get(code)?;
        Ok(explain(&policy, profile))
    }

    /// Most requested programs, in catalog order.
    ///
    /// The shortlist is curated until application statistics are collected;
    /// names missing from the catalog are skipped.
    pub fn popular_policies(&self, limit: usize) -> Result<Vec<PolicyRecord>, PolicyServiceError> {
        const POPULAR_POLICY_NAMES: [&str; 5] = [
            "청년전세임대주택",
            "디딤돌 대출",
            "생애최초 특별공급",
            "LH청약플러스",
            "신혼부부 특별공급",
        ];

        let popular = self
            .catalog
            .active_policies()?
            .into_iter()
            .filter(|policy| POPULAR_POLICY_NAMES.contains(&policy.name.as_str()))
            .take(limit)
            .collect();
        Ok(popular)
    }

    /// Case-sensitive substring search over name, description, and the type
    /// and category labels of active programs.
    pub fn search_by_keyword(
        &self,
        keyword: &str,
        limit: usize,
    ) -> Result<Vec<PolicyRecord>, PolicyServiceError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        let matches = self
            .catalog
            .active_policies()?
            .into_iter()
            .filter(|policy| {
                policy.name.contains(keyword)
                    || policy.description.contains(keyword)
                    || policy.policy_type.label().contains(keyword)
                    || policy.category.label().contains(keyword)
            })
            .take(limit)
            .collect();
        Ok(matches)
    }
}

/// Error raised by the matching service. The only real failure mode is an
/// unresolved policy code; everything else is modeled as data.
#[derive(Debug, thiserror::Error)]
pub enum PolicyServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl PolicyServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PolicyServiceError::Catalog(CatalogError::NotFound))
    }
}
