//! Server configuration read from the command line and the environment.

use thiserror::Error;
use userbox_env_utils::{
    DefaultEnvU16Error, OptionEnvUsizeError, default_env, default_env_u16, option_env_usize,
};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port argument '{0}'")]
    InvalidPortArgument(String),
    #[error(transparent)]
    Port(#[from] DefaultEnvU16Error),
    #[error(transparent)]
    Workers(#[from] OptionEnvUsizeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Config {
    /// Builds the configuration from the process arguments and environment.
    ///
    /// The first argument after the program name takes precedence over `PORT`.
    ///
    /// # Errors
    ///
    /// * If the port argument or `PORT` is not a valid port number
    /// * If `ACTIX_WORKERS` is not a valid number
    pub fn from_env(args: &[String]) -> Result<Self, ConfigError> {
        let port = match args.get(1) {
            Some(arg) => arg
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPortArgument(arg.clone()))?,
            None => default_env_u16("PORT", DEFAULT_PORT)?,
        };

        Ok(Self {
            addr: default_env("BIND_ADDR", DEFAULT_BIND_ADDR),
            port,
            workers: option_env_usize("ACTIX_WORKERS")?,
        })
    }
}
