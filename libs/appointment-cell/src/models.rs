use serde::{Deserialize, Deserializer, Serialize};

/// Only rows in this status count as booked.
pub const STATUS_SCHEDULED: &str = "scheduled";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Appointment {
    pub id: i64,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub doctor_id: i64,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: String,
    pub created_at: String,
}

/// Appointment row joined with the doctor's display name.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UpcomingAppointment {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub appointment: Appointment,
    pub doctor_name: String,
}

/// Booking form as posted by the chat client. Every field is stored as given.
#[derive(Debug, Clone, Deserialize)]
pub struct BookAppointmentRequest {
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    #[serde(deserialize_with = "doctor_id_as_text")]
    pub doctor_id: String,
    pub appointment_date: String,
    pub appointment_time: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookedTimesQuery {
    #[serde(rename = "doctorId")]
    pub doctor_id: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatestAppointmentQuery {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedTimes {
    pub booked_times: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DoctorIdInput {
    Number(i64),
    Text(String),
}

// The client sends the id from a <select>, so it arrives as either a number or a string.
fn doctor_id_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match DoctorIdInput::deserialize(deserializer)? {
        DoctorIdInput::Number(id) => id.to_string(),
        DoctorIdInput::Text(id) => id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(doctor_id: serde_json::Value) -> serde_json::Result<BookAppointmentRequest> {
        serde_json::from_value(json!({
            "patient_name": "Kamal Bandara",
            "patient_email": "kamal@example.com",
            "patient_phone": "0771234567",
            "doctor_id": doctor_id,
            "appointment_date": "2024-03-04",
            "appointment_time": "9:00"
        }))
    }

    #[test]
    fn doctor_id_accepts_number_or_string() {
        assert_eq!(request(json!(3)).unwrap().doctor_id, "3");
        assert_eq!(request(json!("3")).unwrap().doctor_id, "3");
    }

    #[test]
    fn doctor_id_rejects_other_shapes() {
        assert!(request(json!(null)).is_err());
        assert!(request(json!({"id": 3})).is_err());
    }

    #[test]
    fn booked_times_query_uses_camel_case_doctor_id() {
        let query: BookedTimesQuery =
            serde_json::from_value(json!({"doctorId": "7", "date": "2024-03-04"})).unwrap();
        assert_eq!(query.doctor_id.as_deref(), Some("7"));
        assert_eq!(query.date.as_deref(), Some("2024-03-04"));
    }

    #[test]
    fn upcoming_appointment_serializes_flat() {
        let upcoming = UpcomingAppointment {
            appointment: Appointment {
                id: 1,
                patient_name: "Kamal Bandara".to_string(),
                patient_email: "kamal@example.com".to_string(),
                patient_phone: "0771234567".to_string(),
                doctor_id: 2,
                appointment_date: "2024-03-04".to_string(),
                appointment_time: "9:00".to_string(),
                status: STATUS_SCHEDULED.to_string(),
                created_at: "2024-03-01 08:00:00".to_string(),
            },
            doctor_name: "Dr. Nimal Perera".to_string(),
        };

        let value = serde_json::to_value(&upcoming).unwrap();
        assert_eq!(value["doctor_id"], 2);
        assert_eq!(value["doctor_name"], "Dr. Nimal Perera");
        assert!(value.get("appointment").is_none());
    }
}
