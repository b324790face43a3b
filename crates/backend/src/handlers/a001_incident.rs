use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use contracts::domain::a001_incident::Incident;
use contracts::shared::ValidationError;

use crate::domain::a001_incident::repository::UpdateOutcome;
use crate::domain::a001_incident::service;
use crate::AppState;

/// POST /Request_Incident_External_information
///
/// Any store failure, duplicate identifier included, collapses to the same
/// generic 500 body; clients never see internal error text.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let incident = match Incident::from_value(&payload) {
        Ok(incident) => incident,
        Err(e) => return validation_response(e),
    };

    match service::create(&state.incidents, &incident).await {
        Ok(reference) => (
            StatusCode::CREATED,
            Json(json!({
                "Incident_Id": reference,
                "message": "Incident created successfully"
            })),
        ),
        Err(e) => {
            tracing::error!("Error creating incident: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "Failed to create incident" })),
            )
        }
    }
}

/// PUT /Request_Incident_External_information
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let Some(incident_id) = incident_id_from(&payload) else {
        tracing::error!("Incident_Id is required in the request body");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Incident_Id is required in the request body" })),
        );
    };

    let incident = match Incident::from_value(&payload) {
        Ok(incident) => incident,
        Err(e) => return validation_response(e),
    };

    match service::update(&state.incidents, incident_id, &incident).await {
        Ok(UpdateOutcome::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Incident not found" })),
        ),
        Ok(UpdateOutcome::Updated | UpdateOutcome::Unchanged) => (
            StatusCode::OK,
            Json(json!({ "message": "Incident updated successfully" })),
        ),
        Err(e) => {
            tracing::error!("Error updating incident: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "Failed to update incident" })),
            )
        }
    }
}

/// Zero counts as missing, matching the upstream contract where a falsy
/// identifier is rejected before schema validation runs.
fn incident_id_from(payload: &Value) -> Option<i64> {
    match payload.get("Incident_Id")?.as_i64()? {
        0 => None,
        id => Some(id),
    }
}

fn validation_response(error: ValidationError) -> (StatusCode, Json<Value>) {
    tracing::error!(errors = ?error.messages(), "Incident payload failed validation");
    let detail: Vec<Value> = error
        .errors
        .iter()
        .map(|e| json!({ "loc": e.path, "msg": e.message }))
        .collect();
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "detail": detail })),
    )
}
