use std::env;

use dotenvy::dotenv;
use validator::Validate;

use attendee_directory::models::config::ServerConfig;
use attendee_directory::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    // Layer `config/default.yaml`, the profile overrides and `APP_*` variables.
    let environment = config::Environment::with_prefix("APP");
    let server_config = match ServerConfig::load("config", &app_env, environment) {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = server_config.validate() {
        log::error!("Invalid server config: {}", err);
        std::process::exit(1);
    }

    log::info!(
        "Starting attendee directory on {}:{}",
        server_config.address,
        server_config.port
    );

    run(server_config).await
}
