use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use nutrient_attention::config::{LoggingSettings, Settings};
use nutrient_attention::routes;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.is_pretty() {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(&settings.logging);

    info!("Starting micronutrient attention service...");
    info!("Configuration loaded successfully");

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.workers();

    info!("Starting HTTP server on {}:{} ({} workers)", host, port, workers);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
