//! The `get_subnets` pipeline: fetch, classify, aggregate, optionally narrow.

use crate::config::{DEFAULT_PURPOSE, DEFAULT_TARGET};
use crate::error::Result;
use crate::inventory::SubnetInventory;
use crate::models::{Aggregation, Subnets};
use crate::processing::{aggregate, classify, narrow};

/// What to resolve. Defaults to internal EC2 subnets across all accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetQuery {
    /// Type of subnets to look up (`ec2` or `elb`).
    pub target: String,
    /// Purpose the subnet ids must carry.
    pub purpose: String,
    /// Account to narrow to; empty for all.
    pub env: String,
    /// Region to narrow to; empty for all.
    pub region: String,
}

impl Default for SubnetQuery {
    fn default() -> Self {
        SubnetQuery {
            target: DEFAULT_TARGET.to_string(),
            purpose: DEFAULT_PURPOSE.to_string(),
            env: String::new(),
            region: String::new(),
        }
    }
}

impl SubnetQuery {
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = env.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Narrowing only happens when both env and region are given.
    pub fn is_scoped(&self) -> bool {
        !self.env.is_empty() && !self.region.is_empty()
    }
}

/// Resolves subnet placement data from one inventory source.
#[derive(Debug, Clone)]
pub struct SubnetResolver<I> {
    inventory: I,
}

impl<I: SubnetInventory> SubnetResolver<I> {
    pub fn new(inventory: I) -> Self {
        SubnetResolver { inventory }
    }

    /// Both indexes for every account and region, for `query.target` and
    /// `query.purpose`. `env` and `region` are ignored.
    pub fn aggregate(&self, query: &SubnetQuery) -> Result<Aggregation> {
        let records = self.inventory.fetch_all_subnets()?;
        log::info!(
            "Classifying {} subnets for target '{}' purpose '{}'",
            records.len(),
            query.target,
            query.purpose
        );
        itertools::process_results(classify(&records, &query.target), |attrs| {
            aggregate(attrs, &query.purpose)
        })
    }

    /// Availability zones of every account and region, or when `query` is
    /// scoped, the zones and subnet ids of that single account/region.
    pub fn get_subnets(&self, query: &SubnetQuery) -> Result<Subnets> {
        let aggregation = self.aggregate(query)?;
        if !query.is_scoped() {
            return Ok(Subnets::Unscoped(aggregation.availability_zones));
        }
        let scoped = narrow(&aggregation, &query.env, &query.region)?;
        Ok(Subnets::Scoped(scoped))
    }
}

/// One-shot [`SubnetResolver::get_subnets`].
pub fn get_subnets<I: SubnetInventory>(inventory: I, query: &SubnetQuery) -> Result<Subnets> {
    SubnetResolver::new(inventory).get_subnets(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubnetError;
    use crate::models::RawSubnetRecord;
    use std::cell::Cell;

    struct StaticInventory {
        records: Vec<RawSubnetRecord>,
        fetches: Cell<u32>,
    }

    impl SubnetInventory for StaticInventory {
        fn fetch_all_subnets(&self) -> Result<Vec<RawSubnetRecord>> {
            self.fetches.set(self.fetches.get() + 1);
            Ok(self.records.clone())
        }
    }

    fn record(account: &str, az: &str, id: &str, purpose: &str, target: &str) -> RawSubnetRecord {
        RawSubnetRecord {
            account: Some(account.to_string()),
            availability_zone: Some(az.to_string()),
            id: Some(id.to_string()),
            purpose: Some(purpose.to_string()),
            region: Some("us-west-2".to_string()),
            target: Some(target.to_string()),
            ..Default::default()
        }
    }

    fn inventory() -> StaticInventory {
        StaticInventory {
            records: vec![
                record("prod", "us-west-2a", "subnet-1", "internal", "ec2"),
                record("prod", "us-west-2b", "subnet-2", "internal", "elb"),
                record("prod", "us-west-2c", "subnet-3", "external", "ec2"),
                record("dev", "us-west-2a", "subnet-4", "external", "ec2"),
            ],
            fetches: Cell::new(0),
        }
    }

    #[test]
    fn test_query_defaults() {
        let query = SubnetQuery::default();
        assert_eq!(query.target, "ec2");
        assert_eq!(query.purpose, "internal");
        assert!(!query.is_scoped());
        assert!(!SubnetQuery::default().env("prod").is_scoped());
        assert!(!SubnetQuery::default().region("us-west-2").is_scoped());
        assert!(SubnetQuery::default().env("prod").region("us-west-2").is_scoped());
    }

    #[test]
    fn test_unscoped_returns_zones_only() {
        let inventory = inventory();
        let subnets = get_subnets(&inventory, &SubnetQuery::default()).expect("unscoped");
        let zones = subnets.as_unscoped().expect("unscoped result");

        assert_eq!(zones.len(), 2);
        assert_eq!(
            zones.get("prod", "us-west-2").map(|z| z.len()),
            Some(2),
            "elb subnet must not contribute"
        );
        assert_eq!(inventory.fetches.get(), 1);
    }

    #[test]
    fn test_scoped_returns_region_projection() {
        let query = SubnetQuery::default().env("prod").region("us-west-2");
        let subnets = get_subnets(inventory(), &query).expect("scoped");
        let scoped = subnets.as_scoped().expect("scoped result");

        assert_eq!(scoped.subnet_ids(), ["subnet-1"]);
        assert_eq!(scoped.availability_zones().len(), 2);
    }

    #[test]
    fn test_scoped_without_purpose_match_fails() {
        // dev has ec2 zones but no internal subnets.
        let query = SubnetQuery::default().env("dev").region("us-west-2");
        let err = get_subnets(inventory(), &query).unwrap_err();
        assert!(matches!(err, SubnetError::SubnetScope { .. }));
    }

    #[test]
    fn test_missing_field_stops_resolution() {
        let mut inventory = inventory();
        inventory.records[2].region = None;
        let err = SubnetResolver::new(&inventory)
            .aggregate(&SubnetQuery::default())
            .unwrap_err();
        assert!(matches!(
            err,
            SubnetError::MissingField {
                field: "region",
                index: 2
            }
        ));
    }

    #[test]
    fn test_aggregate_keeps_both_indexes() {
        let query = SubnetQuery::default().target("ec2").purpose("external");
        let aggregation = SubnetResolver::new(inventory())
            .aggregate(&query)
            .expect("aggregation");
        assert_eq!(
            aggregation.subnet_ids.get("dev", "us-west-2").cloned(),
            Some(vec!["subnet-4".to_string()])
        );
        assert_eq!(
            aggregation.subnet_ids.get("prod", "us-west-2").cloned(),
            Some(vec!["subnet-3".to_string()])
        );
    }
}
