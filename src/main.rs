use tracing::info;

use mailfrom::{Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = mailfrom::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        mailfrom::logging::init_console_only(&config.logging.level);
    }

    info!("mailfrom - Outgoing Mail Sender Override Service");

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Open the database
    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open database: {e}");
            std::process::exit(1);
        }
    };

    info!(
        "Default sender identity: {} <{}>",
        config.mail.default_from_name, config.mail.default_from_email
    );

    // Start the web server
    let server = WebServer::new(&config, db);
    info!(
        "Web server configured on {}:{}",
        config.server.host, config.server.port
    );

    if let Err(e) = server.run().await {
        tracing::error!("Web server error: {e}");
        std::process::exit(1);
    }
}
