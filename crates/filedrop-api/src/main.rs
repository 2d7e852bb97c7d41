mod error;
mod handlers;
mod setup;
mod state;
mod telemetry;

use filedrop_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (telemetry, storage, routes)
    let (_state, router) = crate::setup::initialize_app().await?;

    // Start the server
    crate::setup::server::start_server(&config, router).await?;

    Ok(())
}
