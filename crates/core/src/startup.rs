use std::{net::SocketAddr, path::Path, sync::Arc, time::Instant};

use axum::{
    body::Body,
    http::{HeaderValue, Request, StatusCode},
    middleware,
    middleware::Next,
    response::Response,
    routing::get,
    Json, Router,
};
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{error, info};

use crate::{
    app_state::AppState,
    authentication::BasicAuthCredentials,
    data::create_data_routes,
    demo::demo_page,
    environment::load_env_from_project_path,
    logger::setup_info_logger,
    yaml::{read, ApiConfig, ReadYamlError},
};

#[derive(Error, Debug)]
pub enum StartApiError {
    #[error("Failed to start the API: {0}")]
    ApiStartupError(#[from] std::io::Error),
}

/// Health check endpoint
async fn health_check() -> Json<String> {
    Json("healthy".to_string())
}

/// Middleware that logs all HTTP requests and responses with timing information.
///
/// 401 and 404 are expected client outcomes on these routes, so anything
/// short of a server error is recorded at info level.
async fn activity_logger(req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_server_error() {
        error!("{} {} responded with {} after {:?}", method, uri, status, duration);
    } else {
        info!("{} {} responded with {} after {:?}", method, uri, status, duration);
    }

    Ok(response)
}

/// Assembles the full application router: the demo page, the health check,
/// the protected `/api` surface, request logging, and CORS built from the
/// configured origins (absent or empty means any origin).
///
/// Anything outside these routes falls through to the router's default
/// not-found handling: 404 with an empty body and no challenge header.
pub fn build_router(app_state: Arc<AppState>, api_config: &ApiConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(
            if api_config.allowed_origins.as_ref().is_none_or(|origins| origins.is_empty()) {
                AllowOrigin::any()
            } else {
                AllowOrigin::list(
                    api_config
                        .allowed_origins
                        .clone()
                        .unwrap_or_default()
                        .into_iter()
                        .filter_map(|origin| HeaderValue::from_str(&origin).ok())
                        .collect::<Vec<HeaderValue>>(),
                )
            },
        )
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(demo_page))
        .route("/health", get(health_check))
        .nest("/api", create_data_routes())
        .layer(middleware::from_fn(activity_logger))
        .layer(cors)
        .with_state(app_state)
}

async fn start_api(api_config: ApiConfig) -> Result<(), StartApiError> {
    let app_state = Arc::new(AppState {
        credentials: BasicAuthCredentials {
            username: api_config.authentication_username.clone(),
            password: api_config.authentication_password.clone(),
        },
    });

    let app = build_router(app_state, &api_config)
        .into_make_service_with_connect_info::<SocketAddr>();

    let address =
        format!("{}:{}", api_config.host.unwrap_or("localhost".to_string()), api_config.port);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("authgate is up on http://{}", address);
    axum::serve(listener, app).await.map_err(StartApiError::ApiStartupError)?;

    Ok(())
}

#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum StartError {
    #[error("Failed to find the yaml file")]
    NoYamlFileFound,

    #[error("{0}")]
    ReadYamlError(#[from] ReadYamlError),

    #[error("Failed to start the API: {0}")]
    ApiStartupError(#[from] StartApiError),
}

pub async fn start(project_path: &Path) -> Result<(), StartError> {
    setup_info_logger();
    load_env_from_project_path(project_path);

    info!("Starting up the server");

    let yaml_path = project_path.join("authgate.yaml");
    if !yaml_path.exists() {
        error!("Could not find authgate.yaml in {}", project_path.display());
        return Err(StartError::NoYamlFileFound);
    }

    let config = read(&yaml_path)?;

    info!("Loaded project {}", config.name);

    start_api(config.api_config).await?;

    Ok(())
}
