use charity_api::charity::donation_service_server::DonationServiceServer;
use charity_server::{
    auth::JwtAuth,
    config::ServerConfig,
    donation::{
        orchestrator::SubmissionOrchestrator,
        payload::PayloadEncoder,
        qr::{PngQrRenderer, QrOptions},
    },
    interceptors::authn::AuthnInterceptor,
    services::donation::DonationServiceImpl,
};
use charity_storage::sqlx::{client::PgDatabaseClient, store::PgOnDemandStore};
use log::info;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tonic::transport::Server;
use tower::ServiceBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    info!("Loading config");
    let config = ServerConfig::from_env()?;

    // Database connection:
    info!("Connecting to database");
    let database = Arc::new(
        PgDatabaseClient::connect(&config.postgres.uri, config.postgres.max_connections).await?,
    );

    info!("Running migrations (if any)");
    database.run_migrations().await?;

    // Dependencies:
    let jwt_auth = Arc::new(JwtAuth::new(
        &config.auth.jwt_secret,
        &config.auth.audience,
    ));
    let renderer = Arc::new(PngQrRenderer::new(QrOptions::from_config(&config.qr)?));
    let orchestrator =
        SubmissionOrchestrator::new(PayloadEncoder::new(&config.payment), renderer);

    // Middleware:
    let middleware = ServiceBuilder::new()
        .timeout(Duration::from_secs(30))
        .into_inner();

    // Services:
    let reflection_service = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(charity_api::FILE_DESCRIPTOR_SET)
        .build_v1()?;
    let donation_service =
        DonationServiceImpl::<_, PgOnDemandStore>::new(database.clone(), orchestrator);

    let addr: SocketAddr = format!("0.0.0.0:{0}", config.port).parse()?;
    info!("Starting server: {:?}", addr);
    Server::builder()
        .layer(middleware)
        .add_service(reflection_service)
        .add_service(DonationServiceServer::with_interceptor(
            donation_service,
            AuthnInterceptor::new(jwt_auth),
        ))
        .serve(addr)
        .await?;

    Ok(())
}
