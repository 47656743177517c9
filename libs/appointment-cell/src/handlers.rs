use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::error::AppError;

use crate::models::{
    BookAppointmentRequest, BookedTimes, BookedTimesQuery, LatestAppointmentQuery, UpcomingAppointment,
};
use crate::services::booking::AppointmentService;

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment_id = AppointmentService::new(&state).book(&request).await?;

    Ok(Json(json!({
        "message": "Appointment booked successfully",
        "appointmentId": appointment_id
    })))
}

#[axum::debug_handler]
pub async fn get_booked_times(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookedTimesQuery>,
) -> Result<Json<BookedTimes>, AppError> {
    let booked_times = AppointmentService::new(&state)
        .booked_times(query.doctor_id.as_deref(), query.date.as_deref())
        .await?;

    Ok(Json(BookedTimes { booked_times }))
}

#[axum::debug_handler]
pub async fn get_latest_appointment(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LatestAppointmentQuery>,
) -> Result<Json<UpcomingAppointment>, AppError> {
    AppointmentService::new(&state)
        .latest(query.email.as_deref(), query.name.as_deref(), Utc::now().date_naive())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No upcoming appointments found".to_string()))
}

/// Scheduled appointments for today and tomorrow.
#[axum::debug_handler]
pub async fn get_appointment_reminders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UpcomingAppointment>>, AppError> {
    let reminders = AppointmentService::new(&state)
        .reminders(Utc::now().date_naive())
        .await?;
    Ok(Json(reminders))
}
