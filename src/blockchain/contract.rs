//! Typed bindings for the ArtiinaNFT bead registry.
//!
//! One method per bound view function, each a thin delegate to
//! [`LedgerClient::call`]. Wide integers are returned as `U256`; narrowing
//! happens in the resolver.

use alloy::primitives::{Address, U256};
use alloy::sol;

use crate::blockchain::client::LedgerClient;
use crate::blockchain::types::BlockchainResult;

sol! {
    /// Read-only surface of the ArtiinaNFT contract.
    #[derive(Debug)]
    interface ArtiinaNFT {
        function beads(string beadId) external view returns (
            string id,
            string sku,
            uint256 createdAt,
            bool validated,
            bool isValid,
            uint256 currentVersion,
            uint256 lastUpdate,
            string genesisCID
        );

        function exists(string beadId) external view returns (bool);

        function beadToToken(string beadId) external view returns (uint256);

        function getBeadMetadata(string beadId) external view returns (
            uint256 currentVersion,
            bool validated,
            bool isValid,
            uint256 lastUpdate,
            string genesisCID
        );

        function getTransferCount(string beadId) external view returns (uint256);

        function tokenURI(uint256 tokenId) external view returns (string);
    }
}

/// Primary on-chain record of a bead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeadRecord {
    pub id: String,
    pub sku: String,
    /// Unix seconds.
    pub created_at: U256,
    pub validated: bool,
    pub is_valid: bool,
    pub current_version: U256,
    /// Unix seconds.
    pub last_update: U256,
    pub genesis_cid: String,
}

impl From<ArtiinaNFT::beadsReturn> for BeadRecord {
    fn from(r: ArtiinaNFT::beadsReturn) -> Self {
        Self {
            id: r.id,
            sku: r.sku,
            created_at: r.createdAt,
            validated: r.validated,
            is_valid: r.isValid,
            current_version: r.currentVersion,
            last_update: r.lastUpdate,
            genesis_cid: r.genesisCID,
        }
    }
}

/// Derived metadata view exposed separately by the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeadMetadata {
    pub current_version: U256,
    pub validated: bool,
    pub is_valid: bool,
    /// Unix seconds.
    pub last_update: U256,
    pub genesis_cid: String,
}

impl From<ArtiinaNFT::getBeadMetadataReturn> for BeadMetadata {
    fn from(r: ArtiinaNFT::getBeadMetadataReturn) -> Self {
        Self {
            current_version: r.currentVersion,
            validated: r.validated,
            is_valid: r.isValid,
            last_update: r.lastUpdate,
            genesis_cid: r.genesisCID,
        }
    }
}

/// ArtiinaNFT reader bound to one contract address.
#[derive(Debug, Clone)]
pub struct ContractReader {
    client: LedgerClient,
    address: Address,
}

impl ContractReader {
    pub fn new(client: LedgerClient, address: Address) -> Self {
        Self { client, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub async fn exists(&self, bead_id: &str) -> BlockchainResult<bool> {
        self.client
            .call(self.address, ArtiinaNFT::existsCall { beadId: bead_id.to_string() })
            .await
    }

    pub async fn bead(&self, bead_id: &str) -> BlockchainResult<BeadRecord> {
        self.client
            .call(self.address, ArtiinaNFT::beadsCall { beadId: bead_id.to_string() })
            .await
            .map(BeadRecord::from)
    }

    pub async fn bead_metadata(&self, bead_id: &str) -> BlockchainResult<BeadMetadata> {
        self.client
            .call(self.address, ArtiinaNFT::getBeadMetadataCall { beadId: bead_id.to_string() })
            .await
            .map(BeadMetadata::from)
    }

    pub async fn token_id(&self, bead_id: &str) -> BlockchainResult<U256> {
        self.client
            .call(self.address, ArtiinaNFT::beadToTokenCall { beadId: bead_id.to_string() })
            .await
    }

    pub async fn transfer_count(&self, bead_id: &str) -> BlockchainResult<U256> {
        self.client
            .call(self.address, ArtiinaNFT::getTransferCountCall { beadId: bead_id.to_string() })
            .await
    }

    /// Metadata URI of the NFT minted for a bead.
    pub async fn token_uri(&self, token_id: U256) -> BlockchainResult<String> {
        self.client
            .call(self.address, ArtiinaNFT::tokenURICall { tokenId: token_id })
            .await
    }
}
