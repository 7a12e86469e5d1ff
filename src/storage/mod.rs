use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{Application, ApplicationUpdate, NewApplication, NewUser, User, UserUpdate};

#[cfg(test)]
pub mod mock;
pub mod postgres;

#[cfg(test)]
pub use mock::MockRepository;
pub use postgres::PostgresRepository;

/// Failures shared by every store implementation. Messages are part of the
/// API contract: handlers surface them verbatim to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("User not found")]
    UserNotFound,
    #[error("Application not found")]
    ApplicationNotFound,
    /// Owning-user reference was the nil UUID.
    #[error("Invalid Application ID")]
    InvalidReference,
    /// Owning-user reference points at no stored user.
    #[error("User doesn't exist, can't create application")]
    OwnerNotFound,
    /// Anything the database driver reports, stringified so the error stays
    /// cloneable for the canned test double.
    #[error("{0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

/// Data-access contract over users and applications.
///
/// Handlers depend on this trait alone, so the Postgres store and the canned
/// in-memory double are interchangeable behind `Arc<dyn Repository>`.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;
    async fn get_user(&self, id: Uuid) -> Result<User, StoreError>;
    async fn get_user_by_email(&self, email: &str) -> Result<User, StoreError>;
    async fn update_user(&self, update: UserUpdate, id: Uuid) -> Result<User, StoreError>;
    async fn delete_user(&self, id: Uuid) -> Result<u64, StoreError>;
    async fn all_users(&self) -> Result<Vec<User>, StoreError>;

    async fn create_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, StoreError>;
    async fn get_application(&self, id: Uuid) -> Result<Application, StoreError>;
    async fn update_application(
        &self,
        update: ApplicationUpdate,
        id: Uuid,
    ) -> Result<Application, StoreError>;
    async fn delete_application(&self, id: Uuid) -> Result<u64, StoreError>;
    async fn all_applications(&self) -> Result<Vec<Application>, StoreError>;
    async fn all_user_applications(&self, user_id: Uuid) -> Result<Vec<Application>, StoreError>;
}
