use std::env;

use config::Config;
use dotenvy::dotenv;

use contacts_api::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config_path = env::var("CONTACTS_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    let config = Config::builder()
        .add_source(config::File::with_name(&config_path).required(false))
        .add_source(config::Environment::default())
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    let server_config: ServerConfig = config
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Invalid configuration: {e}")))?;

    contacts_api::run(server_config).await
}
