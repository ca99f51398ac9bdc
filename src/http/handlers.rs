use std::time::Instant;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::response::ErrorBody;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::resolver::ResolveError;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub contract_configured: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Endpoints {
    pub health: String,
    pub bead: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub endpoints: Endpoints,
    pub documentation: String,
}

pub async fn get_service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: state.service.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: Endpoints {
            health: "/health".to_string(),
            bead: "/{beadId}".to_string(),
        },
        documentation: state.service.documentation.clone(),
    })
}

pub async fn get_health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        contract_configured: state.resolver.is_configured(),
    })
}

pub async fn get_bead(
    State(state): State<AppState>,
    uri: Uri,
    bead_id: Result<Path<String>, PathRejection>,
) -> Response {
    let started = Instant::now();

    // Segments that do not decode to UTF-8 cannot be a bead id.
    let result = match bead_id {
        Ok(Path(bead_id)) => state.resolver.resolve(&bead_id).await,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Undecodable bead id segment");
            Err(ResolveError::InvalidFormat {
                bead_id: uri.path().trim_matches('/').to_string(),
            })
        }
    };

    match result {
        Ok(bead) => {
            metrics::record_resolution("resolved", started);
            Json(bead).into_response()
        }
        Err(e) => {
            metrics::record_resolution(e.kind(), started);
            e.into_response()
        }
    }
}

pub async fn not_found(uri: Uri) -> Response {
    let body = ErrorBody {
        error: "Not found".to_string(),
        message: format!("No route for {}", uri.path()),
        bead_id: None,
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
