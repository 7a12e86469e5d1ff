use crate::config::AppConfig;
use crate::storage::{PostgresRepository, Repository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn Repository>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        let repo = Arc::new(PostgresRepository::new(pool)) as Arc<dyn Repository>;
        Ok(Self { repo, config })
    }

    #[cfg(test)]
    pub fn mock(repo: crate::storage::MockRepository) -> Self {
        use crate::config::JwtConfig;

        let config = Arc::new(AppConfig {
            database_url: String::new(),
            jwt: JwtConfig {
                secret: "test-secret".into(),
            },
        });
        Self {
            repo: Arc::new(repo),
            config,
        }
    }
}
