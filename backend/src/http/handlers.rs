//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! event builder for the actual computation.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, NaiveTime, Utc};

use super::dto::{AstroMode, AstroQuery, AstroResponse, HealthResponse};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// =============================================================================
// Astro events
// =============================================================================

/// GET /api/astro
///
/// `mode=tonight` returns sunset, planet visibility windows and hourly zenith
/// constellations for the coming night. Any other mode returns the principal
/// moon phases over the next `days` days.
pub async fn get_astro(
    State(state): State<AppState>,
    Query(query): Query<AstroQuery>,
) -> HandlerResult<AstroResponse> {
    let request = query.resolve(&state.config)?;
    let now = Utc::now();

    let events = match request.mode {
        AstroMode::Tonight => {
            let reference_date = request.date.unwrap_or_else(|| now.date_naive());
            state.builder.tonight(request.observer, reference_date).await?
        }
        AstroMode::Future => {
            let start = request
                .date
                .map(|d| DateTime::from_naive_utc_and_offset(d.and_time(NaiveTime::MIN), Utc))
                .unwrap_or(now);
            state.builder.future(start, request.days).await?
        }
    };

    tracing::debug!(
        mode = ?request.mode,
        count = events.len(),
        "Built astro events"
    );

    Ok(Json(AstroResponse { events }))
}
