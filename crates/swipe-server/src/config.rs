//! Server configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. an optional TOML file (`--config`),
//! 2. an optional `.env` file (`--env-file`) of `KEY=VALUE` lines,
//! 3. the process environment.
//!
//! `.env` files follow dotenv quoting: single quotes keep their contents
//! literally, and outside them a backslash escapes the next character
//! (`pa\\ss` for a password containing `pa\ss`).

use std::{collections::HashMap, path::Path};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:3000";

/// Runtime server configuration.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(alias = "DATABASE_URL")]
  pub database_url:   String,
  #[serde(alias = "CARD_PASSWORD")]
  pub card_password:  String,
  #[serde(alias = "LISTEN_ADDRESS", default = "default_listen_address")]
  pub listen_address: String,
}

fn default_listen_address() -> String { DEFAULT_LISTEN_ADDRESS.to_owned() }

impl std::fmt::Debug for ServerConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ServerConfig")
      .field("database_url", &self.database_url)
      .field("card_password", &"..")
      .field("listen_address", &self.listen_address)
      .finish()
  }
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error(transparent)]
  Load(#[from] config::ConfigError),
  #[error("failed to read .env file: {0}")]
  DotEnv(#[from] dotenvy::Error),
  #[error("CARD_PASSWORD must not be empty")]
  EmptyPassword,
}

impl ServerConfig {
  /// Layer the configuration sources and deserialise the result.
  ///
  /// `env` replaces the process environment when given; tests use it to
  /// stay hermetic.
  pub fn load(
    config_file: &Path,
    env_file: &Path,
    env: Option<HashMap<String, String>>,
  ) -> Result<Self, ConfigError> {
    // `.env` pairs first, so real environment variables override them.
    let mut vars = read_env_file(env_file)?;
    vars.extend(env.unwrap_or_else(process_env));

    let settings = config::Config::builder()
      .add_source(config::File::from(config_file).required(false))
      .add_source(config::Environment::default().source(Some(vars)))
      .build()?;

    let cfg: ServerConfig = settings.try_deserialize()?;
    if cfg.card_password.is_empty() {
      return Err(ConfigError::EmptyPassword);
    }
    Ok(cfg)
  }
}

/// Pairs from a dotenv file; a missing file yields none.
fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
  let iter = match dotenvy::from_path_iter(path) {
    Ok(iter) => iter,
    Err(e) if e.not_found() => return Ok(HashMap::new()),
    Err(e) => return Err(e.into()),
  };
  Ok(iter.collect::<Result<HashMap<_, _>, _>>()?)
}

/// The process environment, skipping entries that are not valid UTF-8.
fn process_env() -> HashMap<String, String> {
  std::env::vars_os()
    .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
    .collect()
}
