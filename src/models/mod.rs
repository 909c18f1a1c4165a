//! Wire-format models for the backend REST API.

pub mod attendance;
pub mod member;

pub use attendance::{AttendanceRecord, SaveAttendance};
pub use member::{Member, RosterKind, SaveMember};

/// Deserialize an optional id that the backend may send as a JSON number,
/// a numeric string, or omit entirely.
pub(crate) mod flexible_id {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }
}
