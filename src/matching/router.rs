use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::PolicyCatalog;
use super::domain::{PolicyCode, PolicyRecord, UserProfile};
use super::ranking::MatchResult;
use super::service::PolicyMatchService;

const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Router builder exposing the matching engine over HTTP.
pub fn policy_router<C>(service: Arc<PolicyMatchService<C>>) -> Router
where
    C: PolicyCatalog + 'static,
{
    Router::new()
        .route("/api/v1/policies", get(search_handler::<C>))
        .route("/api/v1/policies/match", post(match_handler::<C>))
        .route("/api/v1/policies/:code", get(details_handler::<C>))
        .route("/api/v1/policies/:code/benefit", post(benefit_handler::<C>))
        .route(
            "/api/v1/policies/:code/eligibility",
            post(eligibility_handler::<C>),
        )
        .with_state(service)
}

#[derive(Debug, Serialize)]
struct MatchResponse {
    count: usize,
    matches: Vec<MatchResult>,
}

#[derive(Debug, Serialize)]
struct PolicyDetailView {
    #[serde(flatten)]
    policy: PolicyRecord,
    eligibility_summary: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    keyword: String,
    limit: Option<usize>,
}

fn not_found_payload(code: &PolicyCode) -> Response {
    let payload = json!({
        "error": "정책을 찾을 수 없습니다.",
        "policy_code": code.0,
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn internal_error_payload(error: impl std::fmt::Display) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}

pub(crate) async fn match_handler<C>(
    State(service): State<Arc<PolicyMatchService<C>>>,
    axum::Json(profile): axum::Json<UserProfile>,
) -> Response
where
    C: PolicyCatalog + 'static,
{
    match service.match_policies(&profile) {
        Ok(matches) => {
            let body = MatchResponse {
                count: matches.len(),
                matches,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => internal_error_payload(error),
    }
}

pub(crate) async fn details_handler<C>(
    State(service): State<Arc<PolicyMatchService<C>>>,
    Path(code): Path<String>,
) -> Response
where
    C: PolicyCatalog + 'static,
{
    let code = PolicyCode::new(code);
    match service.policy_details(&code) {
        Ok(policy) => {
            let eligibility_summary = policy.eligibility_summary();
            let view = PolicyDetailView {
                policy,
                eligibility_summary,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) if error.is_not_found() => not_found_payload(&code),
        Err(error) => internal_error_payload(error),
    }
}

pub(crate) async fn benefit_handler<C>(
    State(service): State<Arc<PolicyMatchService<C>>>,
    Path(code): Path<String>,
    axum::Json(profile): axum::Json<UserProfile>,
) -> Response
where
    C: PolicyCatalog + 'static,
{
    let code = PolicyCode::new(code);
    match service.benefit(&code, &profile) {
        Ok(calculation) => (StatusCode::OK, axum::Json(calculation)).into_response(),
        Err(error) if error.is_not_found() => not_found_payload(&code),
        Err(error) => internal_error_payload(error),
    }
}

pub(crate) async fn eligibility_handler<C>(
    State(service): State<Arc<PolicyMatchService<C>>>,
    Path(code): Path<String>,
    axum::Json(profile): axum::Json<UserProfile>,
) -> Response
where
    C: PolicyCatalog + 'static,
{
    let code = PolicyCode::new(code);
    match service.eligibility(&code, &profile) {
        Ok(explanation) => (StatusCode::OK, axum::Json(explanation)).into_response(),
        Err(error) if error.is_not_found() => not_found_payload(&code),
        Err(error) => internal_error_payload(error),
    }
}

pub(crate) async fn search_handler<C>(
    State(service): State<Arc<PolicyMatchService<C>>>,
    Query(params): Query<SearchParams>,
) -> Response
where
    C: PolicyCatalog + 'static,
{
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    match service.search_by_keyword(&params.keyword, limit) {
        Ok(policies) => {
            let payload = json!({
                "count": policies.len(),
                "policies": policies,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => internal_error_payload(error),
    }
}
