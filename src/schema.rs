use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer};

// Struct representing the request body for creating a new User
#[derive(Debug, Deserialize)]
pub struct CreateUserSchema {
    pub name: String,
    pub username: String,
}

// Struct representing the request body for creating a new Todo
#[derive(Debug, Deserialize)]
pub struct CreateTodoSchema {
    pub title: String,
    #[serde(deserialize_with = "deserialize_deadline")]
    pub deadline: DateTime<Utc>,
}

// Struct representing the request body for updating a Todo
#[derive(Debug, Deserialize)]
pub struct UpdateTodoSchema {
    pub title: String,
    #[serde(deserialize_with = "deserialize_deadline")]
    pub deadline: DateTime<Utc>,
}

/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

fn deserialize_deadline<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_deadline(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid deadline: {raw:?}")))
}
