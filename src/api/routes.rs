//! HTTP route handlers for Axum.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

use crate::{
    api::types::{ErrorDto, HealthDto, LabelDto},
    config::Settings,
    data::{load_advanced, load_overview, AdvancedSnapshot, OverviewSnapshot},
    error::SnapshotError,
    highlights::symptoms::{display_label, is_known_code},
    reports::{
        self, AgeBracketReport, CoverageReport, GenderReport, StateReport, StatesReport,
        SymptomProfileReport, SymptomRanking, YearsReport,
    },
};

use super::AppState;

type ApiError = (StatusCode, Json<ErrorDto>);
type ApiResult<T> = Result<Json<T>, ApiError>;

pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn age_brackets(State(state): State<AppState>) -> ApiResult<AgeBracketReport> {
    let snapshot = advanced(&state.settings)?;
    Ok(Json(reports::age_brackets(&snapshot)))
}

pub async fn gender(State(state): State<AppState>) -> ApiResult<GenderReport> {
    let snapshot = advanced(&state.settings)?;
    Ok(Json(reports::gender(&snapshot)))
}

pub async fn santa_catarina(State(state): State<AppState>) -> ApiResult<StateReport> {
    let snapshot = advanced(&state.settings)?;
    Ok(Json(reports::santa_catarina(&snapshot)))
}

pub async fn symptom_profile(State(state): State<AppState>) -> ApiResult<SymptomProfileReport> {
    let snapshot = advanced(&state.settings)?;
    Ok(Json(reports::symptom_profile(&snapshot)))
}

pub async fn coverage(State(state): State<AppState>) -> ApiResult<CoverageReport> {
    let snapshot = advanced(&state.settings)?;
    Ok(Json(reports::coverage(&snapshot)))
}

pub async fn symptoms(State(state): State<AppState>) -> ApiResult<SymptomRanking> {
    let snapshot = overview(&state.settings)?;
    Ok(Json(reports::symptom_ranking(&snapshot)))
}

pub async fn states(State(state): State<AppState>) -> ApiResult<StatesReport> {
    let snapshot = overview(&state.settings)?;
    Ok(Json(reports::states(&snapshot)))
}

pub async fn years(State(state): State<AppState>) -> ApiResult<YearsReport> {
    let snapshot = overview(&state.settings)?;
    Ok(Json(reports::years(&snapshot)))
}

pub async fn symptom_label(Path(codigo): Path<String>) -> Json<LabelDto> {
    Json(LabelDto {
        rotulo: display_label(&codigo),
        conhecido: is_known_code(&codigo),
        codigo,
    })
}

fn advanced(settings: &Settings) -> Result<AdvancedSnapshot, ApiError> {
    load_advanced(&settings.advanced_path()).map_err(unavailable)
}

fn overview(settings: &Settings) -> Result<OverviewSnapshot, ApiError> {
    load_overview(&settings.overview_path()).map_err(unavailable)
}

fn unavailable(err: SnapshotError) -> ApiError {
    warn!(path = %err.path().display(), %err, "snapshot unavailable");
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorDto {
            error: err.to_string(),
        }),
    )
}
