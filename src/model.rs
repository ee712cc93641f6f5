//! Movie row and request payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored movie. `id` and the timestamps are assigned by the database.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of create and update requests.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MoviePayload {
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_year_is_optional_and_extra_fields_ignored() {
        let p: MoviePayload = serde_json::from_str(r#"{"title":"Dune","id":7}"#).unwrap();
        assert_eq!(
            p,
            MoviePayload {
                title: "Dune".into(),
                year: None
            }
        );
    }

    #[test]
    fn payload_requires_title() {
        assert!(serde_json::from_str::<MoviePayload>(r#"{"year":2021}"#).is_err());
        assert!(serde_json::from_str::<MoviePayload>(r#"{"title":3}"#).is_err());
    }
}
