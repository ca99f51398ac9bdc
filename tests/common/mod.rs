//! Shared utilities for gateway integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use artiina_gateway::blockchain::contract::ArtiinaNFT;
use artiina_gateway::blockchain::{
    BlockchainError, BlockchainResult, ContractReader, LedgerClient, LedgerTransport,
};
use artiina_gateway::{BeadResolver, GatewayConfig, HttpServer, Shutdown};
use async_trait::async_trait;
use tokio::net::TcpListener;

pub const CONTRACT: &str = "0x68e00fC57974b9AeDd8f436E207BFf7B673132CC";

/// Bead state served by [`MockLedger`].
#[derive(Clone)]
pub struct MockBead {
    pub sku: &'static str,
    pub created_at: u64,
    pub version: U256,
    pub last_update: u64,
    pub genesis_cid: &'static str,
    pub token_id: U256,
    pub transfers: u64,
}

pub fn gold_bead() -> MockBead {
    MockBead {
        sku: "GOLD-1OZ",
        created_at: 1_700_000_000,
        version: U256::from(2u64),
        last_update: 1_700_050_000,
        genesis_cid: "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi",
        token_id: U256::from(7u64),
        transfers: 3,
    }
}

/// Contract double that answers ABI-encoded reads from memory.
#[derive(Default)]
pub struct MockLedger {
    beads: HashMap<String, MockBead>,
    offline: bool,
    calls: AtomicUsize,
}

impl MockLedger {
    pub fn with_bead(mut self, id: &str, bead: MockBead) -> Self {
        self.beads.insert(id.to_string(), bead);
        self
    }

    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn lookup(&self, id: &str) -> BlockchainResult<&MockBead> {
        self.beads
            .get(id)
            .ok_or_else(|| BlockchainError::Rpc("execution reverted: unknown bead".into()))
    }
}

#[async_trait]
impl LedgerTransport for MockLedger {
    async fn call(&self, _to: Address, input: Bytes) -> BlockchainResult<Bytes> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline {
            return Err(BlockchainError::Rpc(
                "https://rpc.example/v2/SECRET-KEY: connection refused".into(),
            ));
        }

        let bad = |e: alloy::sol_types::Error| BlockchainError::Rpc(e.to_string());
        let out = match input.get(..4) {
            Some(sel) if sel == ArtiinaNFT::existsCall::SELECTOR => {
                let call = ArtiinaNFT::existsCall::abi_decode(&input).map_err(bad)?;
                ArtiinaNFT::existsCall::abi_encode_returns(&self.beads.contains_key(&call.beadId))
            }
            Some(sel) if sel == ArtiinaNFT::beadsCall::SELECTOR => {
                let call = ArtiinaNFT::beadsCall::abi_decode(&input).map_err(bad)?;
                let b = self.lookup(&call.beadId)?;
                ArtiinaNFT::beadsCall::abi_encode_returns(&ArtiinaNFT::beadsReturn {
                    id: call.beadId.clone(),
                    sku: b.sku.to_string(),
                    createdAt: U256::from(b.created_at),
                    validated: true,
                    isValid: true,
                    currentVersion: b.version,
                    lastUpdate: U256::from(b.last_update),
                    genesisCID: b.genesis_cid.to_string(),
                })
            }
            Some(sel) if sel == ArtiinaNFT::getBeadMetadataCall::SELECTOR => {
                let call = ArtiinaNFT::getBeadMetadataCall::abi_decode(&input).map_err(bad)?;
                let b = self.lookup(&call.beadId)?;
                ArtiinaNFT::getBeadMetadataCall::abi_encode_returns(
                    &ArtiinaNFT::getBeadMetadataReturn {
                        currentVersion: b.version,
                        validated: true,
                        isValid: true,
                        lastUpdate: U256::from(b.last_update),
                        genesisCID: b.genesis_cid.to_string(),
                    },
                )
            }
            Some(sel) if sel == ArtiinaNFT::beadToTokenCall::SELECTOR => {
                let call = ArtiinaNFT::beadToTokenCall::abi_decode(&input).map_err(bad)?;
                ArtiinaNFT::beadToTokenCall::abi_encode_returns(&self.lookup(&call.beadId)?.token_id)
            }
            Some(sel) if sel == ArtiinaNFT::getTransferCountCall::SELECTOR => {
                let call = ArtiinaNFT::getTransferCountCall::abi_decode(&input).map_err(bad)?;
                let transfers = U256::from(self.lookup(&call.beadId)?.transfers);
                ArtiinaNFT::getTransferCountCall::abi_encode_returns(&transfers)
            }
            _ => return Err(BlockchainError::Rpc("execution reverted".into())),
        };
        Ok(Bytes::from(out))
    }
}

/// Resolver bound to `ledger` at [`CONTRACT`].
pub fn resolver_over(ledger: Arc<MockLedger>) -> BeadResolver {
    let reader = ContractReader::new(LedgerClient::new(ledger), CONTRACT.parse().unwrap());
    BeadResolver::new(Some(reader), "sepolia")
}

/// Running gateway on an ephemeral port.
pub struct TestGateway {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestGateway {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the gateway with `resolver` on 127.0.0.1 and an OS-assigned port.
pub async fn start_gateway(resolver: BeadResolver) -> TestGateway {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(GatewayConfig::default(), resolver);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    TestGateway { addr, shutdown, handle }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
