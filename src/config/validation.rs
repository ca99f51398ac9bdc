//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and URLs before anything binds or dials
//! - Validate value ranges (timeouts > 0)
//! - Keep the request deadline longer than the two sequential ledger round trips
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Missing ledger settings are not errors; the gateway runs unconfigured

use std::net::SocketAddr;
use std::str::FromStr;

use alloy::primitives::Address;
use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid listener bind address '{0}'")]
    BindAddress(String),

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("invalid RPC URL '{0}'")]
    RpcUrl(String),

    #[error("invalid contract address '{0}'")]
    ContractAddress(String),

    #[error("ledger network label must not be empty")]
    EmptyNetwork,

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error(
        "timeouts.request_secs ({request_secs}) must exceed twice ledger.rpc_timeout_secs ({rpc_timeout_secs})"
    )]
    RequestTimeoutTooShort {
        request_secs: u64,
        rpc_timeout_secs: u64,
    },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if SocketAddr::from_str(&config.listener.bind_address).is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.observability.metrics_enabled
        && SocketAddr::from_str(&config.observability.metrics_address).is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if let Some(rpc_url) = &config.ledger.rpc_url {
        match url::Url::parse(rpc_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => errors.push(ValidationError::RpcUrl(rpc_url.clone())),
        }
    }

    if let Some(address) = &config.ledger.contract_address {
        if Address::from_str(address).is_err() {
            errors.push(ValidationError::ContractAddress(address.clone()));
        }
    }

    if config.ledger.network.trim().is_empty() {
        errors.push(ValidationError::EmptyNetwork);
    }

    if config.ledger.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("ledger.rpc_timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }

    // A lookup is `exists` followed by the joined reads, each bounded by the RPC timeout.
    let (request_secs, rpc_timeout_secs) =
        (config.timeouts.request_secs, config.ledger.rpc_timeout_secs);
    if request_secs > 0 && request_secs <= rpc_timeout_secs.saturating_mul(2) {
        errors.push(ValidationError::RequestTimeoutTooShort {
            request_secs,
            rpc_timeout_secs,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
