use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{form_from_json, BookingField, ConfirmationView};
use crate::services::booking::{min_booking_date, submit_and_notify};
use crate::services::confirmation::acknowledgment;
use crate::services::field_check::{check_field as check_single_field, FieldKind};
use crate::state::AppState;

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<HashMap<String, serde_json::Value>>,
) -> Result<Json<ConfirmationView>, AppError> {
    let form = form_from_json(body).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let ack = acknowledgment(&state.config.cafe_name);
    let view = submit_and_notify(&form, Some(state.notifier.as_ref()), &ack).await?;
    Ok(Json(view))
}

// GET /api/bookings/min-date
pub async fn min_date() -> Json<serde_json::Value> {
    let today = chrono::Local::now().date_naive();
    Json(serde_json::json!({ "min_date": min_booking_date(today) }))
}

// POST /api/fields/check
#[derive(Deserialize)]
pub struct FieldCheckRequest {
    pub field: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Serialize)]
pub struct FieldCheckResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub async fn check_field(
    Json(body): Json<FieldCheckRequest>,
) -> Result<Json<FieldCheckResponse>, AppError> {
    let field = BookingField::parse(&body.field)
        .ok_or_else(|| AppError::BadRequest(format!("unknown field: {}", body.field)))?;

    let response = match check_single_field(FieldKind::for_field(field), &body.value) {
        Ok(()) => FieldCheckResponse {
            valid: true,
            message: None,
        },
        Err(message) => FieldCheckResponse {
            valid: false,
            message: Some(message.to_string()),
        },
    };

    Ok(Json(response))
}
