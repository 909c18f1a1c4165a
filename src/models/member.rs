//! Student/teacher records and their endpoint families.
//!
//! Students and teachers share one record shape; only the endpoint paths and
//! the list envelope key differ, so both are handled by [`Member`] plus a
//! [`RosterKind`] discriminant.

use serde::{Deserialize, Serialize};

use super::flexible_id;

/// A student or teacher record as returned by the backend.
///
/// `id` and `admin_id` tolerate numbers and numeric strings; a record with
/// no id is treated as never persisted and cannot be edited or deleted.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    #[serde(default, deserialize_with = "flexible_id::deserialize")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "flexible_id::deserialize")]
    pub admin_id: Option<i64>,
}

/// Create/update body for a student or teacher.
///
/// Password is write-only: it appears here but never in [`Member`], and edit
/// forms always start with a blank password field.
#[derive(Debug, Clone, Serialize)]
pub struct SaveMember {
    pub name: String,
    pub email: String,
    pub password: String,
    pub admin_id: i64,
}

/// Which roster a panel operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterKind {
    Students,
    Teachers,
}

impl RosterKind {
    /// Panel display name.
    pub fn label(self) -> &'static str {
        match self {
            RosterKind::Students => "Students",
            RosterKind::Teachers => "Teachers",
        }
    }

    /// Singular form for dialogs and toasts.
    pub fn singular(self) -> &'static str {
        match self {
            RosterKind::Students => "student",
            RosterKind::Teachers => "teacher",
        }
    }

    /// Capitalized singular form.
    pub fn title(self) -> &'static str {
        match self {
            RosterKind::Students => "Student",
            RosterKind::Teachers => "Teacher",
        }
    }

    /// Key under which list responses may wrap the record array.
    pub fn envelope_key(self) -> &'static str {
        match self {
            RosterKind::Students => "student",
            RosterKind::Teachers => "teacher",
        }
    }

    pub fn list_path(self) -> &'static str {
        match self {
            RosterKind::Students => "/show_student",
            RosterKind::Teachers => "/show_teacher",
        }
    }

    pub fn create_path(self) -> &'static str {
        match self {
            RosterKind::Students => "/student_register",
            RosterKind::Teachers => "/teacher_register",
        }
    }

    pub fn update_path(self, id: i64) -> String {
        match self {
            RosterKind::Students => format!("/update_student/{id}"),
            RosterKind::Teachers => format!("/update_teacher/{id}"),
        }
    }

    pub fn delete_path(self, id: i64) -> String {
        match self {
            RosterKind::Students => format!("/delete_student/{id}"),
            RosterKind::Teachers => format!("/delete_teacher/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_deserializes_numeric_ids() {
        let m: Member =
            serde_json::from_str(r#"{"id": 1, "name": "Ann", "email": "a@x.com", "admin_id": 1}"#).unwrap();
        assert_eq!(m.id, Some(1));
        assert_eq!(m.name, "Ann");
        assert_eq!(m.admin_id, Some(1));
    }

    #[test]
    fn test_member_deserializes_string_ids() {
        let m: Member =
            serde_json::from_str(r#"{"id": "7", "name": "Bo", "email": "b@x.com", "admin_id": "2"}"#).unwrap();
        assert_eq!(m.id, Some(7));
        assert_eq!(m.admin_id, Some(2));
    }

    #[test]
    fn test_member_without_id_is_unpersisted() {
        let m: Member = serde_json::from_str(r#"{"name": "Cy", "email": "c@x.com"}"#).unwrap();
        assert_eq!(m.id, None);
        assert_eq!(m.admin_id, None);
    }

    #[test]
    fn test_member_garbage_id_becomes_none() {
        let m: Member = serde_json::from_str(r#"{"id": "not-a-number", "name": "Dee"}"#).unwrap();
        assert_eq!(m.id, None);
    }

    #[test]
    fn test_save_member_serializes_all_fields() {
        let body = SaveMember {
            name: "Ann".into(),
            email: "a@x.com".into(),
            password: "pw".into(),
            admin_id: 1,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["name"], "Ann");
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["password"], "pw");
        assert_eq!(json["admin_id"], 1);
    }

    #[test]
    fn test_student_paths() {
        let k = RosterKind::Students;
        assert_eq!(k.list_path(), "/show_student");
        assert_eq!(k.create_path(), "/student_register");
        assert_eq!(k.update_path(3), "/update_student/3");
        assert_eq!(k.delete_path(5), "/delete_student/5");
        assert_eq!(k.envelope_key(), "student");
    }

    #[test]
    fn test_teacher_paths() {
        let k = RosterKind::Teachers;
        assert_eq!(k.list_path(), "/show_teacher");
        assert_eq!(k.create_path(), "/teacher_register");
        assert_eq!(k.update_path(3), "/update_teacher/3");
        assert_eq!(k.delete_path(5), "/delete_teacher/5");
        assert_eq!(k.envelope_key(), "teacher");
    }
}
