//! Configuration loading from disk and the process environment.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Port of the listener bind address.
pub const ENV_PORT: &str = "PORT";
/// JSON-RPC endpoint of the ledger node.
pub const ENV_RPC_URL: &str = "SEPOLIA_RPC_URL";
/// ArtiinaNFT contract address.
pub const ENV_CONTRACT_ADDRESS: &str = "ARTIINA_NFT_ADDRESS";
/// Network label echoed in responses.
pub const ENV_NETWORK: &str = "ARTIINA_NETWORK";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    InvalidEnv { var: &'static str, value: String },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::InvalidEnv { var, value } => {
                write!(f, "Invalid value for {}: '{}'", var, value)
            }
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from an optional TOML file, apply environment
/// overrides from the process environment, then validate.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Same as [`load_config`] with an explicit environment lookup.
pub fn load_config_with_env<F>(path: Option<&Path>, env: F) -> Result<GatewayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        }
        None => GatewayConfig::default(),
    };

    apply_env_overrides(&mut config, env)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay environment variables on top of file configuration.
///
/// Empty values are treated as unset.
pub fn apply_env_overrides<F>(config: &mut GatewayConfig, env: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    if let Some(port) = lookup(ENV_PORT) {
        let port: u16 = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
            var: ENV_PORT,
            value: port.clone(),
        })?;
        config.listener.bind_address = match config.listener.bind_address.parse::<SocketAddr>() {
            Ok(mut addr) => {
                addr.set_port(port);
                addr.to_string()
            }
            Err(_) => format!("0.0.0.0:{}", port),
        };
    }

    if let Some(rpc_url) = lookup(ENV_RPC_URL) {
        config.ledger.rpc_url = Some(rpc_url);
    }
    if let Some(address) = lookup(ENV_CONTRACT_ADDRESS) {
        config.ledger.contract_address = Some(address);
    }
    if let Some(network) = lookup(ENV_NETWORK) {
        config.ledger.network = network;
    }

    Ok(())
}
