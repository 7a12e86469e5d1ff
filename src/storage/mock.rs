use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::{Repository, StoreError};
use crate::model::{Application, ApplicationUpdate, NewApplication, NewUser, User, UserUpdate};

/// Canned store double. Every operation ignores its arguments and returns
/// the configured value, or the configured error when one is set.
///
/// Deliberately not a fake store: it lets the HTTP layer be tested against
/// repository success and failure without Postgres, nothing more.
#[derive(Clone)]
pub struct MockRepository {
    pub user: User,
    pub application: Application,
    pub rows_affected: u64,
    pub error: Option<StoreError>,
}

impl MockRepository {
    /// Double primed with one deterministic user and application.
    pub fn canned() -> Self {
        let user = User {
            id: Uuid::from_u128(1),
            email: "jo@example.com".into(),
            password_hash: String::new(),
            first_name: "Jo".into(),
            last_name: "Doe".into(),
            is_verified: false,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
            deleted_at: None,
        };
        let application = Application {
            id: Uuid::from_u128(2),
            job_title: "Engineer".into(),
            company: "Acme".into(),
            description: String::new(),
            job_url: String::new(),
            location: String::new(),
            status: 0,
            kind: String::new(),
            user_id: user.id,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
            deleted_at: None,
        };
        Self {
            user,
            application,
            rows_affected: 1,
            error: None,
        }
    }

    /// Same double, but every operation fails with `error`.
    pub fn failing(error: StoreError) -> Self {
        Self {
            error: Some(error),
            ..Self::canned()
        }
    }

    fn outcome<T>(&self, value: T) -> Result<T, StoreError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl Repository for MockRepository {
    async fn create_user(&self, _user: NewUser) -> Result<User, StoreError> {
        self.outcome(self.user.clone())
    }

    async fn get_user(&self, _id: Uuid) -> Result<User, StoreError> {
        self.outcome(self.user.clone())
    }

    async fn get_user_by_email(&self, _email: &str) -> Result<User, StoreError> {
        self.outcome(self.user.clone())
    }

    async fn update_user(&self, _update: UserUpdate, _id: Uuid) -> Result<User, StoreError> {
        self.outcome(self.user.clone())
    }

    async fn delete_user(&self, _id: Uuid) -> Result<u64, StoreError> {
        self.outcome(self.rows_affected)
    }

    async fn all_users(&self) -> Result<Vec<User>, StoreError> {
        self.outcome(vec![self.user.clone()])
    }

    async fn create_application(
        &self,
        _application: NewApplication,
    ) -> Result<Application, StoreError> {
        self.outcome(self.application.clone())
    }

    async fn get_application(&self, _id: Uuid) -> Result<Application, StoreError> {
        self.outcome(self.application.clone())
    }

    async fn update_application(
        &self,
        _update: ApplicationUpdate,
        _id: Uuid,
    ) -> Result<Application, StoreError> {
        self.outcome(self.application.clone())
    }

    async fn delete_application(&self, _id: Uuid) -> Result<u64, StoreError> {
        self.outcome(self.rows_affected)
    }

    async fn all_applications(&self) -> Result<Vec<Application>, StoreError> {
        self.outcome(vec![self.application.clone()])
    }

    async fn all_user_applications(&self, _user_id: Uuid) -> Result<Vec<Application>, StoreError> {
        self.outcome(vec![self.application.clone()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_canned_value_regardless_of_arguments() {
        let mock = MockRepository::canned();

        let by_id = mock.get_user(Uuid::new_v4()).await.unwrap();
        let by_email = mock.get_user_by_email("whatever@example.com").await.unwrap();
        assert_eq!(by_id.id, mock.user.id);
        assert_eq!(by_email.id, mock.user.id);

        let listed = mock.all_applications().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, mock.application.id);
    }

    #[tokio::test]
    async fn failing_double_returns_the_seeded_error() {
        let mock = MockRepository::failing(StoreError::Database("boom".into()));

        let err = mock.get_user(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, StoreError::Database("boom".into()));

        let err = mock.create_application(NewApplication::default()).await.unwrap_err();
        assert_eq!(err, StoreError::Database("boom".into()));
    }

    #[tokio::test]
    async fn delete_reports_configured_row_count() {
        let mut mock = MockRepository::canned();
        mock.rows_affected = 0;

        assert_eq!(mock.delete_user(Uuid::new_v4()).await.unwrap(), 0);
        assert_eq!(mock.delete_application(Uuid::new_v4()).await.unwrap(), 0);
    }
}
