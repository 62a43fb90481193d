//! Results handed back to callers of the resolver.

use super::{AccountAzIndex, SubnetIdIndex};
use serde::ser::{Error, Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, BTreeSet};

/// Both indexes built from one pass over the classified inventory.
///
/// The two key sets differ: `availability_zones` covers every classified
/// subnet, `subnet_ids` only those of the requested purpose.
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub availability_zones: AccountAzIndex,
    pub subnet_ids: SubnetIdIndex,
}

const SUBNET_IDS_KEY: &str = "subnet_ids";

/// Zones and subnet ids of a single account/region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedResult {
    region: String,
    availability_zones: BTreeSet<String>,
    subnet_ids: Vec<String>,
}

impl ScopedResult {
    pub fn new(
        region: impl Into<String>,
        availability_zones: BTreeSet<String>,
        subnet_ids: Vec<String>,
    ) -> Self {
        ScopedResult {
            region: region.into(),
            availability_zones,
            subnet_ids,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn availability_zones(&self) -> &BTreeSet<String> {
        &self.availability_zones
    }

    pub fn subnet_ids(&self) -> &[String] {
        &self.subnet_ids
    }
}

/// Zones sit directly under the region key while ids sit one level deeper,
/// under `subnet_ids` then the region:
///
/// ```json
/// {"us-west-2": ["us-west-2a"], "subnet_ids": {"us-west-2": ["subnet-1"]}}
/// ```
impl Serialize for ScopedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.region == SUBNET_IDS_KEY {
            return Err(S::Error::custom(format!(
                "region '{SUBNET_IDS_KEY}' collides with the subnet id key"
            )));
        }
        let ids: BTreeMap<&str, &Vec<String>> =
            BTreeMap::from([(self.region.as_str(), &self.subnet_ids)]);
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&self.region, &self.availability_zones)?;
        map.serialize_entry(SUBNET_IDS_KEY, &ids)?;
        map.end()
    }
}

/// Outcome of `get_subnets`.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Subnets {
    /// No env/region given: zones for every account and region.
    Unscoped(AccountAzIndex),
    /// Env and region given.
    Scoped(ScopedResult),
}

impl Subnets {
    pub fn as_scoped(&self) -> Option<&ScopedResult> {
        match self {
            Subnets::Scoped(scoped) => Some(scoped),
            Subnets::Unscoped(_) => None,
        }
    }

    pub fn as_unscoped(&self) -> Option<&AccountAzIndex> {
        match self {
            Subnets::Unscoped(index) => Some(index),
            Subnets::Scoped(_) => None,
        }
    }
}
