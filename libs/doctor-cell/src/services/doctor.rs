use tracing::debug;

use shared_database::{AppState, Database, DbError};

use crate::models::{Doctor, DoctorSchedule};

pub struct DoctorService {
    db: Database,
}

impl DoctorService {
    pub fn new(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
        }
    }

    /// All doctors, or those whose specialization contains `specialization`.
    pub async fn list_doctors(&self, specialization: Option<&str>) -> Result<Vec<Doctor>, DbError> {
        let doctors = match specialization {
            Some(specialization) => {
                debug!("Listing doctors matching specialization {:?}", specialization);
                sqlx::query_as::<_, Doctor>(
                    r#"SELECT id, name, specialization, department_id, available_days, available_times
                       FROM doctors
                       WHERE specialization LIKE ?
                       ORDER BY id"#,
                )
                .bind(format!("%{}%", specialization))
                .fetch_all(self.db.pool())
                .await?
            }
            None => {
                sqlx::query_as::<_, Doctor>(
                    r#"SELECT id, name, specialization, department_id, available_days, available_times
                       FROM doctors
                       ORDER BY id"#,
                )
                .fetch_all(self.db.pool())
                .await?
            }
        };

        Ok(doctors)
    }

    pub async fn get_doctor(&self, doctor_id: i64) -> Result<Option<Doctor>, DbError> {
        let doctor = sqlx::query_as::<_, Doctor>(
            r#"SELECT id, name, specialization, department_id, available_days, available_times
               FROM doctors
               WHERE id = ?"#,
        )
        .bind(doctor_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(doctor)
    }

    pub async fn get_schedule(&self, doctor_id: i64) -> Result<Option<DoctorSchedule>, DbError> {
        let schedule = sqlx::query_as::<_, DoctorSchedule>(
            "SELECT available_days, available_times FROM doctors WHERE id = ?",
        )
        .bind(doctor_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(schedule)
    }
}
