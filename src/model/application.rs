use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// One tracked job application, owned by a user.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Application {
    pub id: Uuid,
    pub job_title: String,
    pub company: String,
    pub description: String,
    pub job_url: String,
    pub location: String,
    pub status: i32, // pipeline stage, client-defined ordinal
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub user_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(skip_serializing)]
    #[allow(dead_code)] // soft-delete marker, consulted only by the SQL filters
    pub deleted_at: Option<OffsetDateTime>,
}

/// Payload for creating an application. `user_id` defaults to the nil
/// UUID, which the store rejects before touching the database.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewApplication {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub job_url: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: i32,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub user_id: Uuid,
}

/// Partial update for an application. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationUpdate {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub job_url: Option<String>,
    pub location: Option<String>,
    pub status: Option<i32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl ApplicationUpdate {
    /// Empty strings count as absent, same contract as [`super::UserUpdate`].
    pub fn normalize(mut self) -> Self {
        fn drop_empty(field: &mut Option<String>) {
            if field.as_deref() == Some("") {
                *field = None;
            }
        }
        drop_empty(&mut self.job_title);
        drop_empty(&mut self.company);
        drop_empty(&mut self.description);
        drop_empty(&mut self.job_url);
        drop_empty(&mut self.location);
        drop_empty(&mut self.kind);
        self
    }
}
