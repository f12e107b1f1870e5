use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for government support programs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PolicyCode(pub String);

impl PolicyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl fmt::Display for PolicyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Program type driving the base priority during ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    JeonseLoan,
    PurchaseLoan,
    RentalHousing,
    Subscription,
    SpecialSupply,
    GuaranteeInsurance,
}

impl PolicyType {
    /// Korean display name as published by the administering institutions.
    pub const fn label(self) -> &'static str {
        match self {
            PolicyType::JeonseLoan => "전세자금",
            PolicyType::PurchaseLoan => "구입자금",
            PolicyType::RentalHousing => "임대주택",
            PolicyType::Subscription => "청약",
            PolicyType::SpecialSupply => "특별공급",
            PolicyType::GuaranteeInsurance => "보증보험",
        }
    }
}

/// Target group a program was designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyCategory {
    Youth,
    Newlywed,
    MultiChild,
    FirstTimeBuyer,
    General,
}

impl PolicyCategory {
    pub const fn label(self) -> &'static str {
        match self {
            PolicyCategory::Youth => "청년",
            PolicyCategory::Newlywed => "신혼부부",
            PolicyCategory::MultiChild => "다자녀",
            PolicyCategory::FirstTimeBuyer => "생애최초",
            PolicyCategory::General => "일반",
        }
    }
}

/// First-level administrative divisions of Korea.
///
/// Region scoping is exact-match on this enum rather than substring matching
/// on free-text names, so "강남" can never accidentally match an unrelated
/// neighborhood label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "서울")]
    Seoul,
    #[serde(rename = "부산")]
    Busan,
    #[serde(rename = "대구")]
    Daegu,
    #[serde(rename = "인천")]
    Incheon,
    #[serde(rename = "광주")]
    Gwangju,
    #[serde(rename = "대전")]
    Daejeon,
    #[serde(rename = "울산")]
    Ulsan,
    #[serde(rename = "세종")]
    Sejong,
    #[serde(rename = "경기")]
    Gyeonggi,
    #[serde(rename = "강원")]
    Gangwon,
    #[serde(rename = "충북")]
    ChungcheongNorth,
    #[serde(rename = "충남")]
    ChungcheongSouth,
    #[serde(rename = "전북")]
    JeollaNorth,
    #[serde(rename = "전남")]
    JeollaSouth,
    #[serde(rename = "경북")]
    GyeongsangNorth,
    #[serde(rename = "경남")]
    GyeongsangSouth,
    #[serde(rename = "제주")]
    Jeju,
}

impl Region {
    pub const fn label(self) -> &'static str {
        match self {
            Region::Seoul => "서울",
            Region::Busan => "부산",
            Region::Daegu => "대구",
            Region::Incheon => "인천",
            Region::Gwangju => "광주",
            Region::Daejeon => "대전",
            Region::Ulsan => "울산",
            Region::Sejong => "세종",
            Region::Gyeonggi => "경기",
            Region::Gangwon => "강원",
            Region::ChungcheongNorth => "충북",
            Region::ChungcheongSouth => "충남",
            Region::JeollaNorth => "전북",
            Region::JeollaSouth => "전남",
            Region::GyeongsangNorth => "경북",
            Region::GyeongsangSouth => "경남",
            Region::Jeju => "제주",
        }
    }

    /// Resolve a Korean display name back to a region.
    pub fn from_label(label: &str) -> Option<Self> {
        const ALL: [Region; 17] = [
            Region::Seoul,
            Region::Busan,
            Region::Daegu,
            Region::Incheon,
            Region::Gwangju,
            Region::Daejeon,
            Region::Ulsan,
            Region::Sejong,
            Region::Gyeonggi,
            Region::Gangwon,
            Region::ChungcheongNorth,
            Region::ChungcheongSouth,
            Region::JeollaNorth,
            Region::JeollaSouth,
            Region::GyeongsangNorth,
            Region::GyeongsangSouth,
            Region::Jeju,
        ];
        let trimmed = label.trim();
        ALL.into_iter().find(|region| region.label() == trimmed)
    }
}

/// One government housing-support program with its eligibility bounds and
/// benefit terms. Records are seeded once and only ever deactivated, never
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub code: PolicyCode,
    pub name: String,
    pub policy_type: PolicyType,
    pub category: PolicyCategory,
    pub description: String,

    // Eligibility bounds. `None` means the bound does not apply.
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
    pub income_min: Option<i64>,
    pub income_max: Option<i64>,
    pub asset_limit: Option<i64>,

    // Special-condition flags. Only `first_time_buyer_only` is a hard
    // requirement; the other two influence ranking alone.
    pub first_time_buyer_only: bool,
    pub newlywed_priority: bool,
    pub multi_child_benefit: bool,

    // Geographic scope. An empty `available_regions` set means nationwide.
    pub available_regions: BTreeSet<Region>,
    pub excluded_regions: BTreeSet<Region>,

    // Benefit terms, in KRW and percent per annum.
    pub loan_limit: Option<i64>,
    pub interest_rate: Option<f64>,
    pub loan_period_max: Option<u32>,

    // Application metadata surfaced to end users.
    pub application_url: Option<String>,
    pub required_documents: Vec<String>,
    pub contact_info: Option<String>,

    // Lifecycle.
    pub is_active: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl PolicyRecord {
    pub fn is_nationwide(&self) -> bool {
        self.available_regions.is_empty()
    }

    /// Check the record-level invariants before it is admitted to a catalog.
    pub fn validate(&self) -> Result<(), PolicyValidationError> {
        if let (Some(min), Some(max)) = (self.age_min, self.age_max) {
            if min > max {
                return Err(PolicyValidationError::AgeBoundsInverted { min, max });
            }
        }
        if let (Some(min), Some(max)) = (self.income_min, self.income_max) {
            if min > max {
                return Err(PolicyValidationError::IncomeBoundsInverted { min, max });
            }
        }
        if let Some(rate) = self.interest_rate {
            if rate < 0.0 {
                return Err(PolicyValidationError::NegativeInterestRate(rate));
            }
        }
        Ok(())
    }

    /// One-line Korean summary of the eligibility bounds for list views.
    pub fn eligibility_summary(&self) -> String {
        let mut conditions = Vec::new();

        if self.age_min.is_some() || self.age_max.is_some() {
            let min = self
                .age_min
                .map_or_else(|| "제한없음".to_string(), |age| age.to_string());
            let max = self
                .age_max
                .map_or_else(|| "제한없음".to_string(), |age| age.to_string());
            conditions.push(format!("나이: {min}~{max}세"));
        }

        if let Some(income_max) = self.income_max {
            conditions.push(format!("연소득: {}원 이하", format_krw(income_max)));
        }

        if self.first_time_buyer_only {
            conditions.push("생애최초 구입자".to_string());
        }

        if self.newlywed_priority {
            conditions.push("신혼부부 우대".to_string());
        }

        if conditions.is_empty() {
            "조건 없음".to_string()
        } else {
            conditions.join(" | ")
        }
    }
}

/// Record-level invariant violations caught at catalog insert.
#[derive(Debug, thiserror::Error)]
pub enum PolicyValidationError {
    #[error("age_min {min} exceeds age_max {max}")]
    AgeBoundsInverted { min: u32, max: u32 },
    #[error("income_min {min} exceeds income_max {max}")]
    IncomeBoundsInverted { min: i64, max: i64 },
    #[error("interest rate {0} is negative")]
    NegativeInterestRate(f64),
}

/// Query input for a matching pass. Every field is optional: absence means
/// "unknown", never zero, and the engine must distinguish the two.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub age: Option<u32>,
    pub annual_income: Option<i64>,
    pub region_preference: Option<Region>,
    pub total_assets: Option<i64>,
    pub is_first_time_buyer: Option<bool>,
    pub is_newlywed: Option<bool>,
    pub has_multiple_children: Option<bool>,
    pub budget_max: Option<i64>,
}

/// Render a KRW amount with thousands separators for user-facing messages.
pub fn format_krw(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
