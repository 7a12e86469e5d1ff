use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Account row as stored in Postgres.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // never leaves the API
    pub first_name: String,
    pub last_name: String,
    pub is_verified: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(skip_serializing)]
    #[allow(dead_code)] // soft-delete marker, consulted only by the SQL filters
    pub deleted_at: Option<OffsetDateTime>,
}

/// Payload for account creation and for login.
///
/// Every field defaults to empty so the validator decides what is
/// missing instead of serde rejecting the body outright.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Partial update for an account. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_verified: Option<bool>,
}

impl UserUpdate {
    /// Treats empty strings the same as absent fields, so a client echoing
    /// back `"password": ""` does not wipe the stored hash.
    pub fn normalize(mut self) -> Self {
        fn drop_empty(field: &mut Option<String>) {
            if field.as_deref() == Some("") {
                *field = None;
            }
        }
        drop_empty(&mut self.email);
        drop_empty(&mut self.password);
        drop_empty(&mut self.first_name);
        drop_empty(&mut self.last_name);
        self
    }
}
