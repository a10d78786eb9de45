//! HTTP layer exposing the highlight reports.

pub mod routes;
pub mod types;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
}

/// Build the API router. Every request reads its snapshot afresh.
pub fn router(settings: Settings) -> Router {
    let state = AppState { settings };
    Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/avancado/faixas-etarias", get(routes::age_brackets))
        .route("/api/avancado/genero", get(routes::gender))
        .route("/api/avancado/santa-catarina", get(routes::santa_catarina))
        .route(
            "/api/avancado/sintomas-por-perfil",
            get(routes::symptom_profile),
        )
        .route("/api/avancado/cobertura", get(routes::coverage))
        .route("/api/sintomas", get(routes::symptoms))
        .route("/api/sintomas/rotulo/:codigo", get(routes::symptom_label))
        .route("/api/estados", get(routes::states))
        .route("/api/anos", get(routes::years))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let router = router(settings);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving dengue-highlights API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
