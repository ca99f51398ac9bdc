//! Bead resolution pipeline: validate, check existence, fan out reads, assemble.

use alloy::primitives::U256;

use crate::blockchain::{BeadMetadata, BeadRecord, ContractReader};
use crate::resolver::bead_id::BeadId;
use crate::resolver::convert::{iso_timestamp, narrow_u64};
use crate::resolver::error::ResolveError;
use crate::resolver::types::ResolvedBead;

/// Resolves bead identifiers against one contract on one network.
///
/// Holds no per-request state; one instance serves all requests concurrently.
#[derive(Debug, Clone)]
pub struct BeadResolver {
    reader: Option<ContractReader>,
    network: String,
}

impl BeadResolver {
    /// Create a resolver. `None` leaves it unconfigured: every well-formed
    /// id then fails with [`ResolveError::Unconfigured`].
    pub fn new(reader: Option<ContractReader>, network: impl Into<String>) -> Self {
        Self {
            reader,
            network: network.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.reader.is_some()
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    /// Checksummed address of the bound contract.
    pub fn contract_address(&self) -> Option<String> {
        self.reader.as_ref().map(|r| r.address().to_checksum(None))
    }

    /// Resolve `raw_id` into a verified bead record.
    pub async fn resolve(&self, raw_id: &str) -> Result<ResolvedBead, ResolveError> {
        let bead_id = BeadId::parse(raw_id)?;
        let reader = self.reader.as_ref().ok_or(ResolveError::Unconfigured)?;
        let id = bead_id.as_str();

        tracing::debug!(bead_id = %bead_id, "Resolving bead");

        if !reader.exists(id).await? {
            return Err(ResolveError::NotFound { bead_id: bead_id.into_string() });
        }

        let (record, metadata, token_id, transfers) = tokio::try_join!(
            reader.bead(id),
            reader.bead_metadata(id),
            reader.token_id(id),
            reader.transfer_count(id),
        )?;

        let resolved = assemble(
            bead_id,
            record,
            metadata,
            token_id,
            transfers,
            &self.network,
            reader.address().to_checksum(None),
        )?;

        tracing::debug!(
            bead_id = %resolved.bead_id,
            version = resolved.version,
            token_id = resolved.token_id,
            "Bead resolved"
        );
        Ok(resolved)
    }
}

fn assemble(
    bead_id: BeadId,
    record: BeadRecord,
    metadata: BeadMetadata,
    token_id: U256,
    transfers: U256,
    network: &str,
    contract_address: String,
) -> Result<ResolvedBead, ResolveError> {
    let version = narrow_u64(metadata.current_version, "version")?;

    Ok(ResolvedBead {
        bead_id: bead_id.into_string(),
        sku: record.sku,
        version,
        genesis_cid: metadata.genesis_cid,
        token_id: narrow_u64(token_id, "tokenId")?,
        validated: metadata.validated,
        is_valid: metadata.is_valid,
        transfers: narrow_u64(transfers, "transfers")?,
        created_at: iso_timestamp(record.created_at, "createdAt")?,
        last_update: iso_timestamp(metadata.last_update, "lastUpdate")?,
        blockchain_verified: true,
        network: network.to_string(),
        contract_address,
        previous_version: version.checked_sub(1),
    })
}
