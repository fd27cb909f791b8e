use crate::{database::client::DatabaseClient, sqlx::store::PgOnDemandStore, Error};
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};
use std::{sync::Arc, time::Duration};

/// Wrapper around sqlx::Pool<Postgres>.
pub struct PgDatabaseClient {
    inner: Arc<Pool<Postgres>>,
}

impl PgDatabaseClient {
    /// Connects to the provided postgres URI and returns the connected client.
    pub async fn connect(postgres_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let inner = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(postgres_uri)
            .await?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Provides access to the underlying sqlx pool.
    pub fn inner(&self) -> &Pool<Postgres> {
        &self.inner
    }

    /// Run migrations.
    pub async fn run_migrations(&self) -> Result<(), Error> {
        Ok(sqlx::migrate!().run(&*self.inner).await?)
    }
}

impl DatabaseClient<PgOnDemandStore> for PgDatabaseClient {
    fn on_demand(&self) -> PgOnDemandStore {
        PgOnDemandStore::new(self.inner.clone())
    }
}
