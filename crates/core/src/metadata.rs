//! Descriptor parsing.
//!
//! Turns the raw text of a `loadstone.mod.json` into a validated
//! [`ModMetadata`]. The schema version gate runs against the raw JSON value
//! before any other field is trusted; there is no migration path for older
//! revisions.

use crate::error::DescriptorError;
use loadstone_api::{CURRENT_SCHEMA_VERSION, ModMetadata};

/// Parse a raw descriptor into a metadata record.
pub fn parse(raw: &str) -> Result<ModMetadata, DescriptorError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    let schema_version = value
        .get("schemaVersion")
        .and_then(serde_json::Value::as_u64)
        .ok_or(DescriptorError::MissingSchemaVersion)?;
    if schema_version != u64::from(CURRENT_SCHEMA_VERSION) {
        return Err(DescriptorError::UnsupportedSchemaVersion(schema_version));
    }

    let metadata: ModMetadata = serde_json::from_value(value)?;
    if metadata.types.is_empty() {
        return Err(DescriptorError::EmptyTypes);
    }
    Ok(metadata)
}
