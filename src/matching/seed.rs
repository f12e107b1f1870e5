//! Seed data for the policy catalog.
//!
//! Carries the currently administered government housing-support programs.
//! Rates and limits are revised periodically by the administering
//! institutions; the figures here reflect the published 2024 terms.

use std::collections::BTreeSet;

use chrono::Local;

use super::domain::{PolicyCategory, PolicyCode, PolicyRecord, PolicyType, Region};

fn base(
    code: &str,
    name: &str,
    policy_type: PolicyType,
    category: PolicyCategory,
    description: &str,
) -> PolicyRecord {
    PolicyRecord {
        code: PolicyCode::new(code),
        name: name.to_string(),
        policy_type,
        category,
        description: description.to_string(),
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
        start_date: Some(Local::now().date_naive()),
        end_date: None,
    }
}

fn documents(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// The government support programs loaded at startup.
pub fn government_policies() -> Vec<PolicyRecord> {
    vec![
        PolicyRecord {
            age_min: Some(19),
            age_max: Some(39),
            income_max: Some(120_000_000),
            asset_limit: Some(29_200_000),
            loan_limit: Some(120_000_000),
            interest_rate: Some(1.2),
            loan_period_max: Some(2),
            available_regions: BTreeSet::from([
                Region::Seoul,
                Region::Gyeonggi,
                Region::Incheon,
                Region::Daejeon,
                Region::Daegu,
                Region::Busan,
                Region::Gwangju,
                Region::Ulsan,
            ]),
            application_url: Some("https://apply.lh.or.kr".to_string()),
            required_documents: documents(&[
                "신청서",
                "주민등록등본",
                "가족관계증명서",
                "소득증명서류",
                "자산증명서류",
                "청년확인서",
            ]),
            contact_info: Some("LH 콜센터: 1600-1004".to_string()),
            ..base(
                "youth-jeonse-rental",
                "청년전세임대주택",
                PolicyType::RentalHousing,
                PolicyCategory::Youth,
                "청년층을 위한 전세임대주택 지원 프로그램으로, 기존 주택을 임차하여 저렴하게 재임대하는 제도입니다.",
            )
        },
        PolicyRecord {
            income_max: Some(130_000_000),
            newlywed_priority: true,
            multi_child_benefit: true,
            application_url: Some("https://apply.lh.or.kr".to_string()),
            required_documents: documents(&["신청서", "주민등록등본", "소득증명서류"]),
            contact_info: Some("LH 콜센터: 1600-1004".to_string()),
            ..base(
                "lh-subscription-plus",
                "LH청약플러스",
                PolicyType::Subscription,
                PolicyCategory::General,
                "LH 분양주택 및 임대주택 청약 시 추가 가점을 받을 수 있는 제도입니다.",
            )
        },
        PolicyRecord {
            loan_limit: Some(300_000_000),
            application_url: Some("https://www.khug.or.kr".to_string()),
            required_documents: documents(&["신청서", "전세계약서", "등기부등본", "주민등록등본"]),
            contact_info: Some("HUG 콜센터: 1688-8114".to_string()),
            ..base(
                "hug-jeonse-guarantee",
                "HUG 전세보증보험",
                PolicyType::GuaranteeInsurance,
                PolicyCategory::General,
                "전세보증금 반환을 보장하는 보증보험으로, 임대인의 보증금 미반환 시 보상을 받을 수 있습니다.",
            )
        },
        PolicyRecord {
            income_max: Some(60_000_000),
            asset_limit: Some(335_000_000),
            loan_limit: Some(250_000_000),
            interest_rate: Some(3.2),
            loan_period_max: Some(40),
            first_time_buyer_only: true,
            application_url: Some("https://www.khf.co.kr".to_string()),
            required_documents: documents(&[
                "대출신청서",
                "소득증명서류",
                "재산세 납세증명서",
                "건축물대장등본",
                "매매계약서",
            ]),
            contact_info: Some("주택금융공사: 1688-8114".to_string()),
            ..base(
                "didimdol-loan",
                "디딤돌 대출",
                PolicyType::PurchaseLoan,
                PolicyCategory::General,
                "무주택 서민의 내집마련을 지원하는 정부지원 주택구입자금 대출입니다.",
            )
        },
        PolicyRecord {
            income_max: Some(130_000_000),
            asset_limit: Some(335_000_000),
            first_time_buyer_only: true,
            application_url: Some("https://apply.lh.or.kr".to_string()),
            required_documents: documents(&[
                "신청서",
                "무주택확인서",
                "소득증명서류",
                "자산증명서류",
                "생애최초 확인서",
            ]),
            contact_info: Some("LH 콜센터: 1600-1004".to_string()),
            ..base(
                "first-home-special-supply",
                "생애최초 특별공급",
                PolicyType::SpecialSupply,
                PolicyCategory::FirstTimeBuyer,
                "생애최초로 주택을 구입하는 무주택자를 위한 특별공급 제도입니다.",
            )
        },
        PolicyRecord {
            income_max: Some(130_000_000),
            asset_limit: Some(335_000_000),
            newlywed_priority: true,
            application_url: Some("https://apply.lh.or.kr".to_string()),
            required_documents: documents(&[
                "신청서",
                "주민등록등본",
                "가족관계증명서",
                "혼인관계증명서",
                "소득증명서류",
            ]),
            contact_info: Some("LH 콜센터: 1600-1004".to_string()),
            ..base(
                "newlywed-special-supply",
                "신혼부부 특별공급",
                PolicyType::SpecialSupply,
                PolicyCategory::Newlywed,
                "혼인 기간 7년 이내의 신혼부부를 위한 주택 특별공급 제도입니다.",
            )
        },
        PolicyRecord {
            income_max: Some(160_000_000),
            asset_limit: Some(335_000_000),
            multi_child_benefit: true,
            application_url: Some("https://apply.lh.or.kr".to_string()),
            required_documents: documents(&[
                "신청서",
                "주민등록등본",
                "가족관계증명서",
                "자녀 출생증명서",
                "소득증명서류",
            ]),
            contact_info: Some("LH 콜센터: 1600-1004".to_string()),
            ..base(
                "multi-child-special-supply",
                "다자녀 가구 특별공급",
                PolicyType::SpecialSupply,
                PolicyCategory::MultiChild,
                "미성년 자녀 3명 이상을 둔 다자녀 가구를 위한 주택 특별공급 제도입니다.",
            )
        },
        PolicyRecord {
            income_max: Some(50_000_000),
            asset_limit: Some(292_000_000),
            loan_limit: Some(120_000_000),
            interest_rate: Some(2.1),
            loan_period_max: Some(2),
            newlywed_priority: true,
            multi_child_benefit: true,
            application_url: Some("https://www.khf.co.kr".to_string()),
            required_documents: documents(&[
                "대출신청서",
                "전세계약서",
                "소득증명서류",
                "재산세 납세증명서",
                "주민등록등본",
            ]),
            contact_info: Some("주택금융공사: 1688-8114".to_string()),
            ..base(
                "beotimmok-jeonse-loan",
                "버팀목 전세자금대출",
                PolicyType::JeonseLoan,
                PolicyCategory::General,
                "무주택 서민의 주거안정을 위한 전세자금 대출 상품입니다.",
            )
        },
        PolicyRecord {
            age_min: Some(19),
            age_max: Some(34),
            income_max: Some(36_000_000),
            interest_rate: Some(3.3),
            application_url: Some("https://www.khf.co.kr".to_string()),
            required_documents: documents(&["신청서", "신분증", "소득증명서류"]),
            contact_info: Some("주택금융공사: 1688-8114".to_string()),
            ..base(
                "youth-subscription-account",
                "청년 우대형 청약통장",
                PolicyType::Subscription,
                PolicyCategory::Youth,
                "만 19세~34세 청년을 위한 우대금리 청약저축 상품입니다.",
            )
        },
        PolicyRecord {
            income_max: Some(70_000_000),
            asset_limit: Some(335_000_000),
            loan_limit: Some(300_000_000),
            interest_rate: Some(3.05),
            loan_period_max: Some(40),
            first_time_buyer_only: true,
            newlywed_priority: true,
            multi_child_benefit: true,
            application_url: Some("https://www.khf.co.kr".to_string()),
            required_documents: documents(&[
                "대출신청서",
                "무주택확인서",
                "소득증명서류",
                "매매계약서",
                "건축물대장등본",
            ]),
            contact_info: Some("주택금융공사: 1688-8114".to_string()),
            ..base(
                "naejip-didimdol-loan",
                "내집마련 디딤돌 대출",
                PolicyType::PurchaseLoan,
                PolicyCategory::General,
                "생애최초 주택구입자를 위한 장기 저금리 대출 상품입니다.",
            )
        },
    ]
}
