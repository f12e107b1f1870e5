use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use policy_match::config::AppConfig;
use policy_match::error::AppError;
use policy_match::matching::domain::format_krw;
use policy_match::matching::{
    government_policies, policy_router, BenefitCalculation, InMemoryPolicyCatalog, MatchResult,
    MatchingConfig, PolicyCode, PolicyMatchService, PolicyServiceError, Region, UserProfile,
};
use policy_match::telemetry;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "policy-match",
    about = "Match user profiles against Korean government housing support programs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run the matching engine offline against the seeded catalog
    Policies {
        #[command(subcommand)]
        command: PoliciesCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum PoliciesCommand {
    /// Filter and rank the catalog for a profile
    Match(ProfileArgs),
    /// Calculate the benefit of one program for a profile
    Benefit(BenefitArgs),
}

#[derive(Args, Debug, Default)]
struct ProfileArgs {
    /// Age in years
    #[arg(long)]
    age: Option<u32>,
    /// Annual income in KRW
    #[arg(long)]
    income: Option<i64>,
    /// Preferred region by Korean short name (e.g. 서울)
    #[arg(long, value_parser = parse_region)]
    region: Option<Region>,
    /// Total assets in KRW
    #[arg(long)]
    assets: Option<i64>,
    /// First-time home buyer
    #[arg(long)]
    first_time_buyer: Option<bool>,
    /// Married within the last seven years
    #[arg(long)]
    newlywed: Option<bool>,
    /// Three or more minor children
    #[arg(long)]
    multi_child: Option<bool>,
    /// Budget cap in KRW
    #[arg(long)]
    budget: Option<i64>,
}

#[derive(Args, Debug)]
struct BenefitArgs {
    /// Policy code to calculate for
    #[arg(long)]
    policy: String,
    #[command(flatten)]
    profile: ProfileArgs,
}

impl ProfileArgs {
    fn into_profile(self) -> UserProfile {
        UserProfile {
            age: self.age,
            annual_income: self.income,
            region_preference: self.region,
            total_assets: self.assets,
            is_first_time_buyer: self.first_time_buyer,
            is_newlywed: self.newlywed,
            has_multiple_children: self.multi_child,
            budget_max: self.budget,
        }
    }
}

fn parse_region(raw: &str) -> Result<Region, String> {
    Region::from_label(raw).ok_or_else(|| format!("unknown region '{raw}'"))
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Policies { command } => run_policies(command),
    }
}

fn seeded_service(
    config: MatchingConfig,
) -> Result<PolicyMatchService<InMemoryPolicyCatalog>, AppError> {
    let catalog = Arc::new(InMemoryPolicyCatalog::new());
    let seeded = catalog.seed_if_empty(government_policies())?;
    if seeded > 0 {
        info!(count = seeded, "seeded policy catalog");
    }
    Ok(PolicyMatchService::new(catalog, config))
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let service = Arc::new(seeded_service(config.matching.clone())?);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(policy_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "policy matching service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_policies(command: PoliciesCommand) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = seeded_service(config.matching)?;

    match command {
        PoliciesCommand::Match(args) => {
            let profile = args.into_profile();
            let matches = service
                .match_policies(&profile)
                .map_err(service_error_to_app)?;
            render_matches(&matches);
        }
        PoliciesCommand::Benefit(args) => {
            let code = PolicyCode::new(args.policy);
            let profile = args.profile.into_profile();
            let calculation = service
                .benefit(&code, &profile)
                .map_err(service_error_to_app)?;
            render_benefit(&calculation);
        }
    }

    Ok(())
}

fn service_error_to_app(error: PolicyServiceError) -> AppError {
    match error {
        PolicyServiceError::Catalog(err) => AppError::Catalog(err),
    }
}

fn render_matches(matches: &[MatchResult]) {
    println!("적용 가능한 정책 {}개", matches.len());
    println!();
    for result in matches {
        let policy = &result.policy;
        println!(
            "[{:>4}] {} ({}) — {}",
            result.priority_score,
            policy.name,
            policy.policy_type.label(),
            policy.eligibility_summary()
        );
        if let Some(limit) = policy.loan_limit {
            let rate = policy
                .interest_rate
                .map_or_else(|| "-".to_string(), |rate| format!("{rate}%"));
            println!("       대출 한도 {}원 / 금리 {}", format_krw(limit), rate);
        }
    }
}

fn render_benefit(calculation: &BenefitCalculation) {
    println!("{} 혜택 계산", calculation.policy_name);
    println!(
        "  대출 가능 금액: {}원",
        format_krw(calculation.loan_amount)
    );
    println!(
        "  금리 {}% / 기간 {}년",
        calculation.interest_rate, calculation.loan_period_years
    );
    println!(
        "  월 상환액: {}원",
        format_krw(calculation.monthly_payment)
    );
    let market = &calculation.market_comparison;
    println!(
        "  시중 금리 {}% 대비 월 {}원, 총 {}원 절약",
        market.market_rate,
        format_krw(market.monthly_savings),
        format_krw(market.total_savings)
    );
    if !calculation.eligibility.is_eligible {
        println!("  자격 미충족:");
        for failed in &calculation.eligibility.failed_conditions {
            println!("    - {failed}");
        }
    }
    for missing in &calculation.eligibility.missing_info {
        println!("  추가 정보 필요: {missing}");
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
