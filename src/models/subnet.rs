//! Subnet records as served by Gate and the normalized tuple derived from them.

use crate::error::{Result, SubnetError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One element of the Gate `/subnets/aws` response.
///
/// The keys the pipeline relies on are optional here so that a record missing
/// one is reported by the classifier as a [`SubnetError::MissingField`]
/// rather than failing the whole response decode.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawSubnetRecord {
    /// Spinnaker account (environment) owning the subnet.
    pub account: Option<String>,
    pub availability_zone: Option<String>,
    /// Subnet identifier, e.g. `subnet-00000000`.
    pub id: Option<String>,
    /// Purpose tag, e.g. `internal` or `external`.
    pub purpose: Option<String>,
    pub region: Option<String>,
    /// Infrastructure category the subnet may be used for, e.g. `ec2` or `elb`.
    pub target: Option<String>,
    // Informational only.
    pub cidr_block: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "type")]
    pub subnet_type: Option<String>,
    pub vpc_id: Option<String>,
    pub available_ip_address_count: Option<u64>,
    pub deprecated: Option<bool>,
}

impl RawSubnetRecord {
    /// Target of the record, or `MissingField` if Gate left it out.
    pub fn target(&self, index: usize) -> Result<&str> {
        required(&self.target, "target", index)
    }

    /// Build the normalized tuple; `index` is the record position for errors.
    pub fn attributes(&self, index: usize) -> Result<SubnetAttributes> {
        Ok(SubnetAttributes {
            account: required(&self.account, "account", index)?.to_string(),
            availability_zone: required(&self.availability_zone, "availabilityZone", index)?
                .to_string(),
            subnet_id: required(&self.id, "id", index)?.to_string(),
            subnet_purpose: required(&self.purpose, "purpose", index)?.to_string(),
            subnet_region: required(&self.region, "region", index)?.to_string(),
        })
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str, index: usize) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or(SubnetError::MissingField { field, index })
}

/// Important subnet attributes configured in Spinnaker.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubnetAttributes {
    pub account: String,
    pub availability_zone: String,
    pub subnet_id: String,
    pub subnet_purpose: String,
    pub subnet_region: String,
}

impl fmt::Display for SubnetAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{id} ({purpose}) {account}/{region}/{az}",
            id = self.subnet_id,
            purpose = self.subnet_purpose,
            account = self.account,
            region = self.subnet_region,
            az = self.availability_zone
        )
    }
}
