//! Domain types for the user collection.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One user record in the collection.
///
/// Invariants held by the store: `id` is unique and monotonically assigned,
/// `email` is unique across the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Stamped once, at creation.
    pub created_at: DateTime<Utc>,
    /// Absent until the record has been updated at least once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating a record. Both fields must be non-empty; the service
/// layer rejects anything else before it reaches the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Partial update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// The fixed records loaded on every process start.
///
/// The collection has no persistence; a restart always begins from these two
/// entries.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: None,
        },
        User {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
            updated_at: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_two_records_with_distinct_emails() {
        let seed = seed_users();
        assert_eq!(seed.len(), 2);
        assert_ne!(seed[0].email, seed[1].email);
        assert!(seed.iter().all(|u| u.updated_at.is_none()));
    }

    #[test]
    fn updated_at_is_omitted_from_json_until_set() {
        let seed = seed_users();
        let json = serde_json::to_value(&seed[0]).unwrap();
        assert!(json.get("updated_at").is_none());
        assert_eq!(json["created_at"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(UserPatch::default().is_empty());
        let patch = UserPatch {
            name: Some("x".to_string()),
            email: None,
        };
        assert!(!patch.is_empty());
    }
}
