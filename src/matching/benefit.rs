use serde::{Deserialize, Serialize};

use super::domain::{PolicyCode, PolicyRecord, UserProfile};
use super::explain::{explain, EligibilityExplanation};

/// Market average lending rate used as the comparison baseline, percent per
/// annum. Overridable through configuration.
pub const DEFAULT_MARKET_RATE: f64 = 5.5;

/// Fallback loan term when a program does not cap the period.
pub const DEFAULT_LOAN_PERIOD_YEARS: u32 = 30;

/// Monetary benefit of one policy's financing terms for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitCalculation {
    pub policy_code: PolicyCode,
    pub policy_name: String,
    /// Loan principal after capping against the user's budget, KRW.
    pub loan_amount: i64,
    pub interest_rate: f64,
    pub loan_period_years: u32,
    /// Fixed monthly annuity payment at the policy rate, KRW (rounded).
    pub monthly_payment: i64,
    pub market_comparison: MarketComparison,
    pub eligibility: EligibilityExplanation,
}

/// The same loan priced at the market baseline rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketComparison {
    pub market_rate: f64,
    pub market_monthly_payment: i64,
    pub monthly_savings: i64,
    pub total_savings: i64,
}

/// Fixed-rate, fixed-term annuity payment.
///
/// `annual_rate_pct` is percent per annum. A zero rate degenerates to plain
/// principal division; the general formula would otherwise divide by zero.
pub fn amortized_monthly_payment(principal: i64, annual_rate_pct: f64, months: u32) -> f64 {
    if principal <= 0 || months == 0 {
        return 0.0;
    }

    let monthly_rate = (annual_rate_pct / 100.0) / 12.0;
    if monthly_rate == 0.0 {
        return principal as f64 / months as f64;
    }

    let growth = (1.0 + monthly_rate).powi(months as i32);
    principal as f64 * (monthly_rate * growth) / (growth - 1.0)
}

/// Compute the benefit of `policy` for `profile` against the market baseline.
///
/// A policy without a loan limit yields zero payment figures; the embedded
/// eligibility breakdown is still produced.
pub fn calculate_benefit(
    policy: &PolicyRecord,
    profile: &UserProfile,
    market_rate: f64,
) -> BenefitCalculation {
    let loan_limit = policy.loan_limit.unwrap_or(0);
    let available_loan = match profile.budget_max {
        Some(budget) if budget > 0 => loan_limit.min(budget),
        _ => loan_limit,
    };

    let interest_rate = policy.interest_rate.unwrap_or(0.0);
    let loan_period_years = policy.loan_period_max.unwrap_or(DEFAULT_LOAN_PERIOD_YEARS);
    let months = loan_period_years * 12;

    // A zero or absent rate degenerates to interest-free repayment of the
    // principal; `amortized_monthly_payment` handles the r = 0 limit.
    let monthly_payment = amortized_monthly_payment(available_loan, interest_rate, months);
    let market_monthly_payment = amortized_monthly_payment(available_loan, market_rate, months);

    let monthly_savings = market_monthly_payment - monthly_payment;
    let total_savings = monthly_savings * months as f64;

    BenefitCalculation {
        policy_code: policy.code.clone(),
        policy_name: policy.name.clone(),
        loan_amount: available_loan,
        interest_rate,
        loan_period_years,
        monthly_payment: monthly_payment.round() as i64,
        market_comparison: MarketComparison {
            market_rate,
            market_monthly_payment: market_monthly_payment.round() as i64,
            monthly_savings: monthly_savings.round() as i64,
            total_savings: total_savings.round() as i64,
        },
        eligibility: explain(policy, profile),
    }
}
