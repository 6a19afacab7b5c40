use crate::error::AppError;
use config::{Config as Cfg, Environment, File, Map};
use serde::Deserialize;

/// Runtime settings shared by every service.
///
/// Values are layered: the service's default port, then an optional
/// `configuration` file in the working directory, then the environment
/// (`PORT`, `LOG_LEVEL`, `OTLP_ENDPOINT`).
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from `.env`, the optional configuration file and
    /// the process environment.
    pub fn load(default_port: u16) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::build(default_port, Environment::default())
    }

    /// Same layering as [`Config::load`], reading variables from `vars`
    /// instead of the process environment.
    pub fn from_env_map(default_port: u16, vars: Map<String, String>) -> Result<Self, AppError> {
        Self::build(default_port, Environment::default().source(Some(vars)))
    }

    fn build(default_port: u16, env: Environment) -> Result<Self, AppError> {
        let config = Cfg::builder()
            .set_default("port", i64::from(default_port))?
            .add_source(File::with_name("configuration").required(false))
            .add_source(env.ignore_empty(true).try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
