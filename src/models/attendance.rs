//! Attendance records and endpoint paths.

use serde::{Deserialize, Serialize};

use super::flexible_id;

// Path spellings ("attandence") match the deployed backend exactly.
pub const LIST_PATH: &str = "/attandence_show";
pub const ENVELOPE_KEY: &str = "attandence";
pub const CREATE_PATH: &str = "/attendance";

pub fn update_path(id: i64) -> String {
    format!("/attandence_update/{id}")
}

pub fn delete_path(id: i64) -> String {
    format!("/attendance_delete/{id}")
}

/// An attendance record as returned by the backend.
///
/// `date` and `status` are kept verbatim; the UI renders whatever the backend
/// sent and only interprets `status` for the row tint (case-insensitive).
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceRecord {
    #[serde(default, deserialize_with = "flexible_id::deserialize")]
    pub id: Option<i64>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "flexible_id::deserialize")]
    pub student_id: Option<i64>,
    #[serde(default, deserialize_with = "flexible_id::deserialize")]
    pub teacher_id: Option<i64>,
    #[serde(default, deserialize_with = "flexible_id::deserialize")]
    pub admin_id: Option<i64>,
}

/// Create/update body for an attendance record.
#[derive(Debug, Clone, Serialize)]
pub struct SaveAttendance {
    /// ISO date, "YYYY-MM-DD".
    pub date: String,
    pub status: String,
    pub student_id: i64,
    pub teacher_id: i64,
    pub admin_id: i64,
}

/// Status values offered by the record form. The backend accepts free-form
/// strings, so list rendering never assumes one of these.
pub const STATUS_CHOICES: [&str; 4] = ["present", "absent", "late", "other"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_match_backend_spelling() {
        assert_eq!(LIST_PATH, "/attandence_show");
        assert_eq!(CREATE_PATH, "/attendance");
        assert_eq!(update_path(9), "/attandence_update/9");
        assert_eq!(delete_path(4), "/attendance_delete/4");
        assert_eq!(ENVELOPE_KEY, "attandence");
    }

    #[test]
    fn test_status_choices_include_other() {
        assert_eq!(STATUS_CHOICES, ["present", "absent", "late", "other"]);
    }

    #[test]
    fn test_record_deserializes_mixed_id_types() {
        let r: AttendanceRecord = serde_json::from_str(
            r#"{"id": "12", "date": "2026-03-01", "status": "Present", "student_id": 5, "teacher_id": "2", "admin_id": 1}"#,
        )
        .unwrap();
        assert_eq!(r.id, Some(12));
        assert_eq!(r.date, "2026-03-01");
        assert_eq!(r.status, "Present");
        assert_eq!(r.student_id, Some(5));
        assert_eq!(r.teacher_id, Some(2));
    }

    #[test]
    fn test_record_missing_fields_default() {
        let r: AttendanceRecord = serde_json::from_str(r#"{"date": "2026-03-01"}"#).unwrap();
        assert_eq!(r.id, None);
        assert_eq!(r.status, "");
        assert_eq!(r.student_id, None);
    }

    #[test]
    fn test_save_body_shape() {
        let body = SaveAttendance {
            date: "2026-03-01".into(),
            status: "late".into(),
            student_id: 5,
            teacher_id: 2,
            admin_id: 1,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["date"], "2026-03-01");
        assert_eq!(json["status"], "late");
        assert_eq!(json["student_id"], 5);
        assert_eq!(json["teacher_id"], 2);
        assert_eq!(json["admin_id"], 1);
    }
}
