//! Service configuration loaded from the environment.

use std::env;

/// Runtime configuration.
///
/// Upload limits and paths are compile-time constants (see [`crate::constants`]);
/// only the listen port is taken from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        const DEFAULT_PORT: u16 = 3000;

        let server_port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?;

        Ok(Config { server_port })
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }
}
