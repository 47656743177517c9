use chrono::{Duration, NaiveDate};
use tracing::{debug, info};

use doctor_cell::iso_date;
use shared_database::{AppState, Database, DbError};

use crate::models::{BookAppointmentRequest, UpcomingAppointment, STATUS_SCHEDULED};

const UPCOMING_COLUMNS: &str = r#"
    SELECT a.id, a.patient_name, a.patient_email, a.patient_phone, a.doctor_id,
           a.appointment_date, a.appointment_time, a.status, a.created_at,
           d.name AS doctor_name
    FROM appointments a
    JOIN doctors d ON a.doctor_id = d.id"#;

pub struct AppointmentService {
    db: Database,
}

impl AppointmentService {
    pub fn new(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
        }
    }

    /// Inserts the booking as submitted and returns the new id.
    ///
    /// Double bookings, unknown doctors and malformed dates are all accepted.
    pub async fn book(&self, request: &BookAppointmentRequest) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"INSERT INTO appointments
                   (patient_name, patient_email, patient_phone, doctor_id, appointment_date, appointment_time)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&request.patient_name)
        .bind(&request.patient_email)
        .bind(&request.patient_phone)
        .bind(&request.doctor_id)
        .bind(&request.appointment_date)
        .bind(&request.appointment_time)
        .execute(self.db.pool())
        .await?;

        let appointment_id = result.last_insert_rowid();
        info!(
            "Booked appointment {} with doctor {} on {} at {}",
            appointment_id, request.doctor_id, request.appointment_date, request.appointment_time
        );
        Ok(appointment_id)
    }

    /// Time tokens of scheduled appointments for one doctor on one date, in
    /// booking order. A missing parameter matches nothing.
    pub async fn booked_times(
        &self,
        doctor_id: Option<&str>,
        date: Option<&str>,
    ) -> Result<Vec<String>, DbError> {
        let times = sqlx::query_scalar::<_, String>(
            r#"SELECT appointment_time FROM appointments
               WHERE doctor_id = ? AND appointment_date = ? AND status = ?
               ORDER BY id"#,
        )
        .bind(doctor_id)
        .bind(date)
        .bind(STATUS_SCHEDULED)
        .fetch_all(self.db.pool())
        .await?;

        Ok(times)
    }

    /// Earliest scheduled appointment on or after `today` whose patient email
    /// equals `email` or whose patient name contains `name`.
    pub async fn latest(
        &self,
        email: Option<&str>,
        name: Option<&str>,
        today: NaiveDate,
    ) -> Result<Option<UpcomingAppointment>, DbError> {
        debug!("Looking up next appointment for email={:?} name={:?}", email, name);

        let name_pattern = name.map(|name| format!("%{}%", name));
        let query = format!(
            r#"{UPCOMING_COLUMNS}
               WHERE (a.patient_email = ? OR a.patient_name LIKE ?)
                 AND a.appointment_date >= ?
                 AND a.status = ?
               ORDER BY a.appointment_date, a.appointment_time
               LIMIT 1"#
        );

        let appointment = sqlx::query_as::<_, UpcomingAppointment>(&query)
            .bind(email)
            .bind(name_pattern)
            .bind(iso_date(today))
            .bind(STATUS_SCHEDULED)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(appointment)
    }

    /// Scheduled appointments dated `today` or the day after.
    pub async fn reminders(&self, today: NaiveDate) -> Result<Vec<UpcomingAppointment>, DbError> {
        let query = format!(
            r#"{UPCOMING_COLUMNS}
               WHERE a.appointment_date BETWEEN ? AND ?
                 AND a.status = ?
               ORDER BY a.appointment_date, a.appointment_time"#
        );

        let appointments = sqlx::query_as::<_, UpcomingAppointment>(&query)
            .bind(iso_date(today))
            .bind(iso_date(today + Duration::days(1)))
            .bind(STATUS_SCHEDULED)
            .fetch_all(self.db.pool())
            .await?;

        Ok(appointments)
    }
}
