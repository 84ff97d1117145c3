#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the terror insights dashboard.
//!
//! Loads the incident dataset once at startup and serves the filter,
//! aggregation, chart and dropdown-option endpoints over JSON. The dataset
//! is immutable, so request handlers share it through an [`Arc`] without
//! any locking.

mod handlers;

use std::path::PathBuf;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, error, middleware, web};
use terror_insights_dataset::{DataLoadError, Dataset};
use terror_insights_server_models::ApiError;
use thiserror::Error;

/// Default dataset file, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "global_terror.csv";

/// Default bind address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// Default port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default JSON body limit. Aggregate requests carry whole record sets.
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Errors that can stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The dataset could not be loaded.
    #[error(transparent)]
    Dataset(#[from] DataLoadError),

    /// The HTTP server failed to bind or run.
    #[error("HTTP server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path to the GTD CSV export.
    pub dataset_path: PathBuf,
    /// Address to bind to.
    pub bind_addr: String,
    /// Port to listen on.
    pub port: u16,
    /// Maximum accepted JSON body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Reads settings from `DATASET_PATH`, `BIND_ADDR`, `PORT` and
    /// `MAX_BODY_BYTES`, falling back to defaults for anything unset or
    /// unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            dataset_path: lookup("DATASET_PATH").map_or(defaults.dataset_path, PathBuf::from),
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            max_body_bytes: lookup("MAX_BODY_BYTES")
                .and_then(|b| b.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// The loaded incident dataset.
    pub dataset: Arc<Dataset>,
}

/// Registers every `/api` route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/summary", web::get().to(handlers::summary))
            .route("/options", web::get().to(handlers::options))
            .route("/options/countries", web::post().to(handlers::countries))
            .route("/options/subregions", web::post().to(handlers::subregions))
            .route("/options/localities", web::post().to(handlers::localities))
            .route("/options/days", web::post().to(handlers::days))
            .route("/filter-data", web::post().to(handlers::filter_data))
            .route("/aggregate", web::post().to(handlers::aggregate))
            .route("/chart", web::post().to(handlers::chart)),
    );
}

/// JSON extractor settings: body limit plus a descriptive 400 response for
/// malformed payloads.
#[must_use]
pub fn json_config(max_body_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_body_bytes)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid request body: {err}");
    log::warn!("{} {}: {message}", req.method(), req.path());
    let response = HttpResponse::BadRequest().json(ApiError { error: message });
    error::InternalError::from_response(err, response).into()
}

/// Loads the dataset and starts the HTTP server.
///
/// This is a regular async function; the caller provides the runtime
/// (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// * [`ServerError::Dataset`] if the dataset cannot be loaded
/// * [`ServerError::Io`] if the server fails to bind or run
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let dataset = Dataset::load(&config.dataset_path)?;

    let state = web::Data::new(AppState {
        dataset: Arc::new(dataset),
    });
    let max_body_bytes = config.max_body_bytes;

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .app_data(json_config(max_body_bytes))
            .configure(configure)
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
