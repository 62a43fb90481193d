//! Subnet inventory read from a captured `/subnets/aws` response.

use super::{decode_records, SubnetInventory};
use crate::error::{Result, SubnetError};
use crate::models::RawSubnetRecord;
use std::path::PathBuf;

/// Serves the records of a JSON file holding a Gate `/subnets/aws` body.
/// Read on every fetch, never written.
#[derive(Debug, Clone)]
pub struct FileInventory {
    path: PathBuf,
}

impl FileInventory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileInventory { path: path.into() }
    }
}

impl SubnetInventory for FileInventory {
    fn fetch_all_subnets(&self) -> Result<Vec<RawSubnetRecord>> {
        log::info!("Reading subnets from file: {}", self.path.display());
        let json = std::fs::read_to_string(&self.path).map_err(|source| SubnetError::Io {
            path: self.path.clone(),
            source,
        })?;
        let subnets = decode_records(&json)?;
        log::debug!("Configured Subnets: {:?}", subnets);
        Ok(subnets)
    }
}
