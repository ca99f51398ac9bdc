//! Narrowing of ledger integers into response types.

use alloy::primitives::U256;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::resolver::error::ResolveError;

/// Narrow a ledger integer to `u64`, failing instead of truncating.
pub fn narrow_u64(value: U256, field: &'static str) -> Result<u64, ResolveError> {
    if value > U256::from(u64::MAX) {
        return Err(ResolveError::Overflow { field });
    }
    Ok(value.to::<u64>())
}

/// Render Unix seconds as RFC 3339 with millisecond precision, e.g.
/// `2023-11-14T22:13:20.000Z`.
pub fn iso_timestamp(seconds: U256, field: &'static str) -> Result<String, ResolveError> {
    let secs = narrow_u64(seconds, field)?;
    let secs = i64::try_from(secs).map_err(|_| ResolveError::Overflow { field })?;
    let instant: DateTime<Utc> =
        DateTime::from_timestamp(secs, 0).ok_or(ResolveError::Overflow { field })?;

    Ok(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}
