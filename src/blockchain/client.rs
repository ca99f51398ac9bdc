//! Read-only ledger client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to a JSON-RPC endpoint
//! - Submit `eth_call` requests (never transactions)
//! - ABI-encode arguments and decode results per a call's declared types
//! - Surface network, node and decode failures as `BlockchainError`

use std::sync::Arc;
use std::time::Duration;

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use async_trait::async_trait;
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::observability::metrics;

/// Raw read access to a ledger node.
#[async_trait]
pub trait LedgerTransport: Send + Sync {
    /// Execute a read-only call of `input` against the contract at `to`.
    async fn call(&self, to: Address, input: Bytes) -> BlockchainResult<Bytes>;
}

/// JSON-RPC transport backed by an alloy HTTP provider.
#[derive(Clone)]
pub struct RpcTransport {
    provider: Arc<dyn Provider + Send + Sync>,
    rpc_url: url::Url,
    timeout_duration: Duration,
}

impl RpcTransport {
    /// Create a transport for `rpc_url`.
    ///
    /// No connection is made until the first call.
    pub fn new(rpc_url: &str, timeout_secs: u64) -> BlockchainResult<Self> {
        let url: url::Url = rpc_url.parse().map_err(|e| {
            BlockchainError::InvalidAddress(format!("RPC URL '{}': {}", rpc_url, e))
        })?;
        let provider = ProviderBuilder::new().connect_http(url.clone());

        Ok(Self {
            provider: Arc::new(provider),
            rpc_url: url,
            timeout_duration: Duration::from_secs(timeout_secs),
        })
    }

    /// Fetch the latest block number to check that the endpoint answers.
    pub async fn probe(&self) -> BlockchainResult<u64> {
        let provider = self.provider.clone();
        match timeout(self.timeout_duration, async move { provider.get_block_number().await }).await {
            Ok(Ok(block)) => Ok(block),
            Ok(Err(e)) => Err(BlockchainError::Rpc(e.to_string())),
            Err(_) => Err(BlockchainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Endpoint this transport talks to.
    pub fn rpc_url(&self) -> &url::Url {
        &self.rpc_url
    }
}

#[async_trait]
impl LedgerTransport for RpcTransport {
    async fn call(&self, to: Address, input: Bytes) -> BlockchainResult<Bytes> {
        let tx = TransactionRequest::default().with_to(to).with_input(input);
        let provider = self.provider.clone();

        match timeout(self.timeout_duration, async move { provider.call(tx).await }).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(e)) => Err(BlockchainError::Rpc(e.to_string())),
            Err(_) => Err(BlockchainError::Timeout(self.timeout_duration.as_secs())),
        }
    }
}

impl std::fmt::Debug for RpcTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcTransport")
            .field("host", &self.rpc_url.host_str())
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}

/// Typed contract-call client over a shared transport.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct LedgerClient {
    transport: Arc<dyn LedgerTransport>,
}

impl LedgerClient {
    pub fn new(transport: Arc<dyn LedgerTransport>) -> Self {
        Self { transport }
    }

    /// Call a view function on `to` and decode its declared return values.
    pub async fn call<C: SolCall>(&self, to: Address, call: C) -> BlockchainResult<C::Return> {
        let input = Bytes::from(call.abi_encode());
        let result = self.transport.call(to, input).await;
        metrics::record_ledger_call(C::SIGNATURE, result.is_ok());

        let output = result.map_err(|e| {
            tracing::warn!(function = C::SIGNATURE, contract = %to, error = %e, "Ledger call failed");
            e
        })?;

        C::abi_decode_returns(&output).map_err(|e| BlockchainError::Decode {
            function: C::SIGNATURE,
            reason: e.to_string(),
        })
    }
}

impl std::fmt::Debug for LedgerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerClient").finish_non_exhaustive()
    }
}
