use std::sync::Arc;

use axum::http::StatusCode;
use tower::ServiceExt;

use super::common::*;
use crate::matching::router::policy_router;

#[tokio::test]
async fn match_route_returns_ranked_matches() {
    let router = policy_router(Arc::new(seeded_service()));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/policies/match")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&young_buyer()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload["count"].as_u64().unwrap() > 0);
    assert!(payload["matches"].is_array());
}

#[tokio::test]
async fn empty_profile_body_still_matches_everything() {
    let router = policy_router(Arc::new(seeded_service()));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/policies/match")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{}"))
                .unwrap(),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["count"].as_u64().unwrap(), 10);
}

#[tokio::test]
async fn details_route_resolves_seeded_policy() {
    let router = policy_router(Arc::new(seeded_service()));

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/policies/didimdol-loan")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["name"], "디딤돌 대출");
    assert!(payload["eligibility_summary"]
        .as_str()
        .unwrap()
        .contains("생애최초"));
}

#[tokio::test]
async fn unknown_policy_maps_to_not_found() {
    let router = policy_router(Arc::new(seeded_service()));

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/policies/no-such-policy")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["policy_code"], "no-such-policy");
}

#[tokio::test]
async fn benefit_route_calculates_for_profile() {
    let router = policy_router(Arc::new(seeded_service()));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/policies/didimdol-loan/benefit")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&young_buyer()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["loan_amount"].as_i64().unwrap(), 250_000_000);
    assert!(payload["market_comparison"]["monthly_savings"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn eligibility_route_reports_missing_info() {
    let router = policy_router(Arc::new(seeded_service()));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/policies/youth-jeonse-rental/eligibility")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{}"))
                .unwrap(),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["is_eligible"], true);
    assert!(payload["missing_info"]
        .as_array()
        .unwrap()
        .iter()
        .any(|msg| msg.as_str().unwrap().contains("나이")));
}

#[tokio::test]
async fn search_route_filters_by_keyword() {
    let router = policy_router(Arc::new(seeded_service()));

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/policies?keyword=%EC%A0%84%EC%84%B8&limit=2")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["count"].as_u64().unwrap(), 2);
}
