//! Resolver output types.

use serde::{Deserialize, Serialize};

/// Authenticity and provenance of one bead, assembled from several ledger reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBead {
    pub bead_id: String,
    pub sku: String,
    /// The contract's `currentVersion`.
    pub version: u64,
    #[serde(rename = "genesisCID")]
    pub genesis_cid: String,
    pub token_id: u64,
    pub validated: bool,
    pub is_valid: bool,
    pub transfers: u64,
    /// RFC 3339, millisecond precision, UTC.
    pub created_at: String,
    /// RFC 3339, millisecond precision, UTC.
    pub last_update: String,
    pub blockchain_verified: bool,
    pub network: String,
    pub contract_address: String,
    /// `version - 1` for evolved beads; absent on the first version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_version: Option<u64>,
}
