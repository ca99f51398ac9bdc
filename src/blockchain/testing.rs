//! In-memory ledger for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use async_trait::async_trait;

use crate::blockchain::client::LedgerTransport;
use crate::blockchain::contract::ArtiinaNFT;
use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// On-chain state of one bead as the stub serves it.
///
/// `Default` is what the contract's mappings return for unknown ids.
#[derive(Debug, Clone, Default)]
pub struct StubBead {
    pub sku: String,
    pub created_at: U256,
    pub validated: bool,
    pub is_valid: bool,
    pub current_version: U256,
    pub last_update: U256,
    pub genesis_cid: String,
    pub token_id: U256,
    pub transfer_count: U256,
}

impl StubBead {
    /// One-ounce gold bead on its third version.
    pub fn gold() -> Self {
        Self {
            sku: "GOLD-1OZ".into(),
            created_at: U256::from(1_700_000_000u64),
            validated: true,
            is_valid: true,
            current_version: U256::from(2u64),
            last_update: U256::from(1_700_050_000u64),
            genesis_cid: "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi".into(),
            token_id: U256::from(7u64),
            transfer_count: U256::from(3u64),
        }
    }
}

/// Ledger transport answering from an in-memory map.
#[derive(Default)]
pub struct StubLedger {
    beads: HashMap<String, StubBead>,
    offline: bool,
    healthy_calls: Option<usize>,
    calls: AtomicUsize,
    last_target: Mutex<Option<Address>>,
}

impl StubLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bead(mut self, id: &str, bead: StubBead) -> Self {
        self.beads.insert(id.to_string(), bead);
        self
    }

    /// Fail every call as an unreachable node would.
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Answer the first `n` calls, then fail like a node that dropped off.
    pub fn failing_after(mut self, n: usize) -> Self {
        self.healthy_calls = Some(n);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_target(&self) -> Option<Address> {
        *self.last_target.lock().unwrap()
    }

    fn answer(&self, input: &[u8]) -> BlockchainResult<Vec<u8>> {
        let selector = input.get(..4).ok_or_else(|| BlockchainError::Rpc("empty calldata".into()))?;
        let decode_err = |e: alloy::sol_types::Error| BlockchainError::Rpc(format!("bad calldata: {e}"));

        if selector == ArtiinaNFT::existsCall::SELECTOR {
            let call = ArtiinaNFT::existsCall::abi_decode(input).map_err(decode_err)?;
            return Ok(ArtiinaNFT::existsCall::abi_encode_returns(&self.beads.contains_key(&call.beadId)));
        }
        if selector == ArtiinaNFT::beadsCall::SELECTOR {
            let call = ArtiinaNFT::beadsCall::abi_decode(input).map_err(decode_err)?;
            let known = self.beads.contains_key(&call.beadId);
            let b = self.beads.get(&call.beadId).cloned().unwrap_or_default();
            let ret = ArtiinaNFT::beadsReturn {
                id: if known { call.beadId } else { String::new() },
                sku: b.sku,
                createdAt: b.created_at,
                validated: b.validated,
                isValid: b.is_valid,
                currentVersion: b.current_version,
                lastUpdate: b.last_update,
                genesisCID: b.genesis_cid,
            };
            return Ok(ArtiinaNFT::beadsCall::abi_encode_returns(&ret));
        }
        if selector == ArtiinaNFT::getBeadMetadataCall::SELECTOR {
            let call = ArtiinaNFT::getBeadMetadataCall::abi_decode(input).map_err(decode_err)?;
            let b = self.beads.get(&call.beadId).cloned().unwrap_or_default();
            let ret = ArtiinaNFT::getBeadMetadataReturn {
                currentVersion: b.current_version,
                validated: b.validated,
                isValid: b.is_valid,
                lastUpdate: b.last_update,
                genesisCID: b.genesis_cid,
            };
            return Ok(ArtiinaNFT::getBeadMetadataCall::abi_encode_returns(&ret));
        }
        if selector == ArtiinaNFT::beadToTokenCall::SELECTOR {
            let call = ArtiinaNFT::beadToTokenCall::abi_decode(input).map_err(decode_err)?;
            let token = self.beads.get(&call.beadId).map(|b| b.token_id).unwrap_or_default();
            return Ok(ArtiinaNFT::beadToTokenCall::abi_encode_returns(&token));
        }
        if selector == ArtiinaNFT::getTransferCountCall::SELECTOR {
            let call = ArtiinaNFT::getTransferCountCall::abi_decode(input).map_err(decode_err)?;
            let count = self.beads.get(&call.beadId).map(|b| b.transfer_count).unwrap_or_default();
            return Ok(ArtiinaNFT::getTransferCountCall::abi_encode_returns(&count));
        }
        if selector == ArtiinaNFT::tokenURICall::SELECTOR {
            let call = ArtiinaNFT::tokenURICall::abi_decode(input).map_err(decode_err)?;
            let uri = format!("ipfs://tokens/{}", call.tokenId);
            return Ok(ArtiinaNFT::tokenURICall::abi_encode_returns(&uri));
        }

        Err(BlockchainError::Rpc("execution reverted: unknown selector".into()))
    }
}

#[async_trait]
impl LedgerTransport for StubLedger {
    async fn call(&self, to: Address, input: Bytes) -> BlockchainResult<Bytes> {
        let seen = self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_target.lock().unwrap() = Some(to);

        if self.offline || self.healthy_calls.is_some_and(|n| seen >= n) {
            return Err(BlockchainError::Rpc("error sending request: connection refused".into()));
        }
        self.answer(&input).map(Bytes::from)
    }
}

/// Transport that fails the test if it is ever reached.
pub struct UnreachableLedger;

#[async_trait]
impl LedgerTransport for UnreachableLedger {
    async fn call(&self, _to: Address, _input: Bytes) -> BlockchainResult<Bytes> {
        panic!("ledger must not be contacted");
    }
}
