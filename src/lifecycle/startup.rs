//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the ledger transport and contract reader from configuration
//! - Degrade to an unconfigured resolver when ledger settings are missing
//!
//! # Design Decisions
//! - Malformed settings are fatal (validation already rejected them)
//! - An unreachable node is not fatal; requests will report it

use std::str::FromStr;
use std::sync::Arc;

use alloy::primitives::Address;

use crate::blockchain::{BlockchainError, BlockchainResult, ContractReader, LedgerClient, RpcTransport};
use crate::config::LedgerConfig;
use crate::resolver::BeadResolver;

/// Build the resolver for the configured ledger.
pub async fn build_resolver(config: &LedgerConfig) -> BlockchainResult<BeadResolver> {
    let (rpc_url, contract_address) = match (&config.rpc_url, &config.contract_address) {
        (Some(url), Some(address)) => (url, address),
        _ => {
            tracing::warn!(
                rpc_configured = config.rpc_url.is_some(),
                contract_configured = config.contract_address.is_some(),
                "Ledger not configured; bead lookups will answer 503"
            );
            return Ok(BeadResolver::new(None, config.network.clone()));
        }
    };

    let address = Address::from_str(contract_address)
        .map_err(|e| BlockchainError::InvalidAddress(format!("{}: {}", contract_address, e)))?;
    let transport = RpcTransport::new(rpc_url, config.rpc_timeout_secs)?;

    match transport.probe().await {
        Ok(block) => tracing::info!(
            rpc_host = transport.rpc_url().host_str().unwrap_or("unknown"),
            block,
            "Connected to ledger"
        ),
        Err(e) => tracing::warn!(
            rpc_host = transport.rpc_url().host_str().unwrap_or("unknown"),
            error = %e,
            "Ledger endpoint not reachable at startup"
        ),
    }

    let reader = ContractReader::new(LedgerClient::new(Arc::new(transport)), address);
    tracing::info!(
        contract = %address,
        network = %config.network,
        "Contract reader bound"
    );

    Ok(BeadResolver::new(Some(reader), config.network.clone()))
}
