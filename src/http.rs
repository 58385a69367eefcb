//! HTTP transport - maps routes onto [`ConfiguratorService`] operations.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /` - welcome message.
//! - `GET /api/v1` and `GET /api/v1/` - API welcome message.
//! - `GET /api/v1/health` - health check.
//! - `POST|GET /api/v1/product-templates[/:template_id]`
//! - `POST|GET /api/v1/product-templates/:template_id/option-categories`
//! - `POST|GET /api/v1/option-categories/:category_id/choices`
//! - `POST|GET /api/v1/product-templates/:template_id/compatibility-rules`
//! - `POST /api/v1/product-templates/:template_id/available-options/:category_id`
//! - `POST /api/v1/product-templates/:template_id/validate`
//!
//! Errors are returned as `{ "error": "<message>" }` with the status from
//! [`ServiceError::status_code`].
//!
//! ## Example
//!
//! ```ignore
//! let service = Arc::new(ConfiguratorService::new(InMemoryStore::new()));
//! let app = http::router(service.clone());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//! http::serve(service, listener).await?;
//! ```

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::catalog::{CatalogStore, RuleStore};
use crate::service::{
    AvailableOptionsRequest, ConfiguratorService, CreateCategoryRequest, CreateChoiceRequest,
    CreateRuleRequest, CreateTemplateRequest, ServiceError, ValidateConfigurationRequest,
};

pub const API_PREFIX: &str = "/api/v1";

type Shared<S> = State<Arc<ConfiguratorService<S>>>;

/// Build an axum `Router` serving the configurator API.
pub fn router<S>(service: Arc<ConfiguratorService<S>>) -> Router
where
    S: CatalogStore + RuleStore + 'static,
{
    let api: Router<Arc<ConfiguratorService<S>>> = Router::new()
        .route("/", get(api_root_handler::<S>))
        .route("/health", get(health_handler::<S>))
        .route("/product-templates", post(create_template_handler::<S>))
        .route("/product-templates/:template_id", get(get_template_handler::<S>))
        .route(
            "/product-templates/:template_id/option-categories",
            post(add_category_handler::<S>).get(list_categories_handler::<S>),
        )
        .route(
            "/option-categories/:category_id/choices",
            post(add_choice_handler::<S>).get(list_choices_handler::<S>),
        )
        .route(
            "/product-templates/:template_id/compatibility-rules",
            post(add_rule_handler::<S>).get(list_rules_handler::<S>),
        )
        .route(
            "/product-templates/:template_id/available-options/:category_id",
            post(available_options_handler::<S>),
        )
        .route(
            "/product-templates/:template_id/validate",
            post(validate_handler::<S>),
        );

    Router::new()
        .route("/", get(root_handler::<S>))
        .route(&format!("{API_PREFIX}/"), get(api_root_handler::<S>))
        .nest(API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Serve the API on an already bound listener until the server stops.
pub async fn serve<S>(
    service: Arc<ConfiguratorService<S>>,
    listener: TcpListener,
) -> Result<(), std::io::Error>
where
    S: CatalogStore + RuleStore + 'static,
{
    axum::serve(listener, router(service)).await
}

fn respond<T: Serialize>(result: Result<T, ServiceError>) -> Response {
    match result {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(e: ServiceError) -> Response {
    let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!(error = %e, "Request failed");
    } else {
        warn!(status = status.as_u16(), error = %e, "Request rejected");
    }
    (status, Json(json!({ "error": e.to_string() }))).into_response()
}

fn decode<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ServiceError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ServiceError::DecodeFailed(rejection.body_text()))
}

/// `GET /`
async fn root_handler<S>(State(service): Shared<S>) -> impl IntoResponse
where
    S: CatalogStore + RuleStore + 'static,
{
    Json(json!({
        "message": format!("Welcome to {}", service.name()),
        "health": format!("{}/health", API_PREFIX),
    }))
}

/// `GET /api/v1/`
async fn api_root_handler<S>(State(service): Shared<S>) -> impl IntoResponse
where
    S: CatalogStore + RuleStore + 'static,
{
    Json(json!({ "message": format!("Welcome to the {}!", service.name()) }))
}

/// `GET /api/v1/health`
async fn health_handler<S>(State(service): Shared<S>) -> impl IntoResponse
where
    S: CatalogStore + RuleStore + 'static,
{
    Json(json!({
        "status": "healthy",
        "message": format!("{} is running", service.name()),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn create_template_handler<S>(
    State(service): Shared<S>,
    payload: Result<Json<CreateTemplateRequest>, JsonRejection>,
) -> Response
where
    S: CatalogStore + RuleStore + 'static,
{
    respond(decode(payload).and_then(|req| service.create_template(req)))
}

async fn get_template_handler<S>(
    State(service): Shared<S>,
    Path(template_id): Path<String>,
) -> Response
where
    S: CatalogStore + RuleStore + 'static,
{
    respond(service.get_template(&template_id))
}

async fn add_category_handler<S>(
    State(service): Shared<S>,
    Path(template_id): Path<String>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Response
where
    S: CatalogStore + RuleStore + 'static,
{
    respond(decode(payload).and_then(|req| service.add_category(&template_id, req)))
}

async fn list_categories_handler<S>(
    State(service): Shared<S>,
    Path(template_id): Path<String>,
) -> Response
where
    S: CatalogStore + RuleStore + 'static,
{
    respond(service.list_categories(&template_id))
}

async fn add_choice_handler<S>(
    State(service): Shared<S>,
    Path(category_id): Path<String>,
    payload: Result<Json<CreateChoiceRequest>, JsonRejection>,
) -> Response
where
    S: CatalogStore + RuleStore + 'static,
{
    respond(decode(payload).and_then(|req| service.add_choice(&category_id, req)))
}

async fn list_choices_handler<S>(
    State(service): Shared<S>,
    Path(category_id): Path<String>,
) -> Response
where
    S: CatalogStore + RuleStore + 'static,
{
    respond(service.list_choices(&category_id))
}

async fn add_rule_handler<S>(
    State(service): Shared<S>,
    Path(template_id): Path<String>,
    payload: Result<Json<CreateRuleRequest>, JsonRejection>,
) -> Response
where
    S: CatalogStore + RuleStore + 'static,
{
    respond(decode(payload).and_then(|req| service.add_rule(&template_id, req)))
}

async fn list_rules_handler<S>(
    State(service): Shared<S>,
    Path(template_id): Path<String>,
) -> Response
where
    S: CatalogStore + RuleStore + 'static,
{
    respond(service.list_rules(&template_id))
}

async fn available_options_handler<S>(
    State(service): Shared<S>,
    Path((template_id, category_id)): Path<(String, String)>,
    payload: Result<Json<AvailableOptionsRequest>, JsonRejection>,
) -> Response
where
    S: CatalogStore + RuleStore + 'static,
{
    respond(
        decode(payload)
            .and_then(|req| service.available_options(&template_id, &category_id, &req)),
    )
}

async fn validate_handler<S>(
    State(service): Shared<S>,
    Path(template_id): Path<String>,
    payload: Result<Json<ValidateConfigurationRequest>, JsonRejection>,
) -> Response
where
    S: CatalogStore + RuleStore + 'static,
{
    respond(decode(payload).and_then(|req| service.validate_configuration(&template_id, &req)))
}
