use crate::sqlx::client::PgDatabaseClient;
use lazy_static::lazy_static;
use testcontainers::{clients::Cli, core::WaitFor, Container, GenericImage};

lazy_static! {
    static ref DOCKER_CLI: Cli = Cli::default();
}

pub struct PgContainer {
    /// The pool of connections to the pg container.
    pub pool: PgDatabaseClient,

    /// Owns container instance because when container is dropped, the
    /// container is stopped and removed.
    #[allow(dead_code)]
    container: Container<'static, GenericImage>,
}

impl PgContainer {
    /// Starts a postgres instance via docker and opens a connection pool.
    pub async fn start() -> Result<PgContainer, anyhow::Error> {
        println!("Starting postgres container...");
        let db = "postgres-db-test";
        let user = "postgres-user-test";
        let password = "postgres-password-test";

        let generic_postgres = GenericImage::new("postgres", "14-alpine")
            .with_wait_for(WaitFor::message_on_stderr(
                "database system is ready to accept connections",
            ))
            .with_env_var("POSTGRES_DB", db)
            .with_env_var("POSTGRES_USER", user)
            .with_env_var("POSTGRES_PASSWORD", password);

        let container = DOCKER_CLI.run(generic_postgres);
        println!("Postgres container {} started", container.id());

        let postgres_uri = format!(
            "postgres://{}:{}@localhost:{}/{}?sslmode=disable",
            user,
            password,
            container.get_host_port_ipv4(5432),
            db
        );

        let container = PgContainer {
            pool: PgDatabaseClient::connect(&postgres_uri, 2).await?,
            container,
        };

        container.prepare().await?;

        Ok(container)
    }

    /// Run migrations and other setup.
    async fn prepare(&self) -> Result<(), anyhow::Error> {
        println!(
            "Running migrations on postgres container {}",
            self.container.id()
        );
        self.pool.run_migrations().await?;
        Ok(())
    }
}
