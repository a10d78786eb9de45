//! Shared DTOs for JSON responses that are not reports.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelDto {
    pub codigo: String,
    pub rotulo: String,
    pub conhecido: bool,
}
