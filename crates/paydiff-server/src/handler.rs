//! Request handlers for the payload comparison API.

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use paydiff_diff::ComparisonResult;
use paydiff_store::{PayloadStore, Slot, StoredComparison, StoredPayload};

use crate::error::ApiError;
use crate::state::AppState;
use crate::validate;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ChangeSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSummary {
    pub has_changes: bool,
    pub total_changes: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotStatus {
    pub received: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_id: Option<Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonStatus {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_changes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_changes: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub payload1: SlotStatus,
    pub payload2: SlotStatus,
    pub comparison: ComparisonStatus,
    pub ready_for_comparison: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResponse {
    pub success: bool,
    pub timestamp: DateTime<Utc>,
    pub comparison: ComparisonResult,
    pub metadata: ComparisonMetadata,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonMetadata {
    pub payload1_timestamp: DateTime<Utc>,
    pub payload2_timestamp: DateTime<Utc>,
    pub comparison_timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

/// Submit a payload.
///
/// The first submission is stored as payload 1 (dropping any stale
/// payload 2); the second is stored as payload 2 and immediately compared
/// against payload 1, with the result persisted and returned.
pub async fn submit_payload(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let errors = validate::validate_payload(&body);
    if !errors.is_empty() {
        return Err(ApiError::InvalidPayload(errors));
    }

    match state.store.get_payload(Slot::Payload1)? {
        None => {
            let stored = StoredPayload::new(body);
            let payload_id = extract_id(&stored.data);
            state.store.set_payload(Slot::Payload1, &stored)?;
            // Fresh comparison round: any leftover second payload is stale.
            state.store.remove(Slot::Payload2)?;
            tracing::info!("first payload stored");

            Ok(Json(SubmitResponse {
                success: true,
                message: "First payload received successfully".to_string(),
                timestamp: Utc::now(),
                payload_id,
                comparison: None,
                summary: None,
                next_step: Some("Send second payload to compare with the first one".to_string()),
            }))
        }
        Some(first) => {
            let second = StoredPayload::new(body);
            let payload_id = extract_id(&second.data);
            state.store.set_payload(Slot::Payload2, &second)?;

            let result = paydiff_diff::compare(&first.data, &second.data);
            let record = StoredComparison {
                result: result.clone(),
                timestamp: Utc::now(),
                payload1_timestamp: first.timestamp,
                payload2_timestamp: second.timestamp,
            };
            state.store.set_comparison(&record)?;
            tracing::info!(total_changes = result.total_changes, "payloads compared");

            Ok(Json(SubmitResponse {
                success: true,
                message: "Second payload received and compared successfully".to_string(),
                timestamp: Utc::now(),
                payload_id,
                summary: Some(ChangeSummary {
                    has_changes: result.has_changes,
                    total_changes: result.total_changes,
                }),
                comparison: Some(result),
                next_step: None,
            }))
        }
    }
}

/// Report which slots are populated and whether a comparison is available.
pub async fn status(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    let payload1 = state.store.get_payload(Slot::Payload1)?;
    let payload2 = state.store.get_payload(Slot::Payload2)?;
    let comparison = state.store.get_comparison()?;

    let ready_for_comparison = payload1.is_some() && payload2.is_some();
    Ok(Json(StatusResponse {
        payload1: slot_status(payload1),
        payload2: slot_status(payload2),
        comparison: match comparison {
            Some(record) => ComparisonStatus {
                available: true,
                timestamp: Some(record.timestamp),
                has_changes: Some(record.result.has_changes),
                total_changes: Some(record.result.total_changes),
            },
            None => ComparisonStatus {
                available: false,
                timestamp: None,
                has_changes: None,
                total_changes: None,
            },
        },
        ready_for_comparison,
        timestamp: Utc::now(),
    }))
}

/// Return the stored comparison result, or 404 if none exists yet.
pub async fn comparison(
    State(state): State<AppState>,
) -> Result<Json<ComparisonResponse>, ApiError> {
    let record = state
        .store
        .get_comparison()?
        .ok_or(ApiError::ComparisonNotFound)?;

    Ok(Json(ComparisonResponse {
        success: true,
        timestamp: Utc::now(),
        metadata: ComparisonMetadata {
            payload1_timestamp: record.payload1_timestamp,
            payload2_timestamp: record.payload2_timestamp,
            comparison_timestamp: record.timestamp,
        },
        comparison: record.result,
    }))
}

/// Delete all stored payloads and the comparison result.
pub async fn clear(State(state): State<AppState>) -> Result<Json<ClearResponse>, ApiError> {
    state.store.clear()?;
    tracing::info!("payload slots cleared");
    Ok(Json(ClearResponse {
        success: true,
        message: "All payload data cleared successfully".to_string(),
        timestamp: Utc::now(),
    }))
}

/// Health check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

fn slot_status(payload: Option<StoredPayload>) -> SlotStatus {
    match payload {
        Some(record) => SlotStatus {
            received: true,
            timestamp: Some(record.timestamp),
            payload_id: extract_id(&record.data),
        },
        None => SlotStatus {
            received: false,
            timestamp: None,
            payload_id: None,
        },
    }
}

/// Best-effort payload identifier: the top-level `id` field, when present.
fn extract_id(data: &Value) -> Option<Value> {
    data.get("id").cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extract_id_reads_top_level_field() {
        assert_eq!(extract_id(&json!({"id": 42})), Some(json!(42)));
        assert_eq!(extract_id(&json!({"id": "abc"})), Some(json!("abc")));
        assert_eq!(extract_id(&json!({"name": "x"})), None);
        assert_eq!(extract_id(&json!([1, 2])), None);
    }

    #[test]
    fn slot_status_for_empty_slot() {
        let status = slot_status(None);
        assert!(!status.received);
        assert!(status.timestamp.is_none());
    }
}
