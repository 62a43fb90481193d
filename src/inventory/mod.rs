//! Subnet inventory sources.
//!
//! - [`gate`] - Spinnaker Gate API with bounded retry
//! - [`file`] - captured Gate response on disk
//! - [`retry`] - the retry policy used by the Gate client

mod file;
mod gate;
mod retry;

use crate::config::InventorySource;
use crate::error::{Result, SubnetError};
use crate::models::RawSubnetRecord;

pub use file::FileInventory;
pub use gate::{interpret_response, subnet_url, GateClient};
pub use retry::RetryPolicy;

/// Anything able to return the full, unfiltered subnet inventory.
pub trait SubnetInventory {
    fn fetch_all_subnets(&self) -> Result<Vec<RawSubnetRecord>>;
}

impl<T: SubnetInventory + ?Sized> SubnetInventory for &T {
    fn fetch_all_subnets(&self) -> Result<Vec<RawSubnetRecord>> {
        (**self).fetch_all_subnets()
    }
}

impl<T: SubnetInventory + ?Sized> SubnetInventory for Box<T> {
    fn fetch_all_subnets(&self) -> Result<Vec<RawSubnetRecord>> {
        (**self).fetch_all_subnets()
    }
}

/// Inventory for a configured source.
pub fn from_source(source: &InventorySource) -> Result<Box<dyn SubnetInventory>> {
    match source {
        InventorySource::Gate {
            api_url,
            client_cert,
            ca_bundle,
        } => Ok(Box::new(GateClient::new(
            api_url,
            client_cert.as_deref(),
            ca_bundle.as_deref(),
        )?)),
        InventorySource::File(path) => Ok(Box::new(FileInventory::new(path.clone()))),
    }
}

/// Decode a JSON array of subnet records, reporting the path of any error.
pub(crate) fn decode_records(json: &str) -> Result<Vec<RawSubnetRecord>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let records: Vec<RawSubnetRecord> = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| {
            log::error!("OUTPUT START:\n\n{json}\n\nOUTPUT END\n");
            e
        })?;
    deserializer.end().map_err(SubnetError::TrailingData)?;
    Ok(records)
}
