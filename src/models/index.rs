//! Account/region keyed indexes.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Nested mapping account -> region -> `C`.
///
/// Entries are created on first access through [`RegionIndex::entry`];
/// [`RegionIndex::get`] never creates anything.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct RegionIndex<C> {
    accounts: BTreeMap<String, BTreeMap<String, C>>,
}

/// Availability zones seen per account and region.
pub type AccountAzIndex = RegionIndex<BTreeSet<String>>;

/// Subnet ids of one purpose per account and region, in inventory order.
pub type SubnetIdIndex = RegionIndex<Vec<String>>;

impl<C> Default for RegionIndex<C> {
    fn default() -> Self {
        RegionIndex {
            accounts: BTreeMap::new(),
        }
    }
}

impl<C: Default> RegionIndex<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Container for `account`/`region`, created empty on first sight.
    pub fn entry(&mut self, account: &str, region: &str) -> &mut C {
        self.accounts
            .entry(account.to_string())
            .or_default()
            .entry(region.to_string())
            .or_default()
    }

    pub fn get(&self, account: &str, region: &str) -> Option<&C> {
        self.accounts.get(account)?.get(region)
    }

    /// Regions known for `account`, sorted.
    pub fn regions(&self, account: &str) -> Vec<&str> {
        self.accounts
            .get(account)
            .map(|regions| regions.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn accounts(&self) -> impl Iterator<Item = &str> {
        self.accounts.keys().map(String::as_str)
    }

    /// Every (account, region, container) triple, sorted by account then region.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &C)> {
        self.accounts.iter().flat_map(|(account, regions)| {
            regions
                .iter()
                .map(move |(region, entry)| (account.as_str(), region.as_str(), entry))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Number of (account, region) pairs.
    pub fn len(&self) -> usize {
        self.accounts.values().map(BTreeMap::len).sum()
    }
}

impl<C: fmt::Debug> fmt::Display for RegionIndex<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (account, regions) in &self.accounts {
            writeln!(f, "{account}:")?;
            for (region, entry) in regions {
                writeln!(f, "  {region}: {entry:?}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creates_on_first_sight() {
        let mut index = AccountAzIndex::new();
        assert!(index.get("prod", "us-east-1").is_none());

        index.entry("prod", "us-east-1").insert("us-east-1a".to_string());
        index.entry("prod", "us-east-1").insert("us-east-1a".to_string());
        index.entry("prod", "us-west-2").insert("us-west-2b".to_string());

        assert_eq!(index.get("prod", "us-east-1").map(|z| z.len()), Some(1));
        assert_eq!(index.regions("prod"), vec!["us-east-1", "us-west-2"]);
        assert_eq!(index.len(), 2);
        assert!(index.regions("dev").is_empty());
    }

    #[test]
    fn test_get_does_not_create() {
        let mut index = SubnetIdIndex::new();
        index.entry("dev", "eu-west-1").push("subnet-1".to_string());

        assert!(index.get("dev", "us-east-1").is_none());
        assert!(index.get("prod", "eu-west-1").is_none());
        assert_eq!(index.len(), 1);
        assert_eq!(index.accounts().collect::<Vec<_>>(), vec!["dev"]);
    }

    #[test]
    fn test_serializes_as_nested_maps() {
        let mut index = SubnetIdIndex::new();
        index.entry("prod", "us-west-2").push("subnet-2".to_string());
        index.entry("prod", "us-west-2").push("subnet-1".to_string());

        let value = serde_json::to_value(&index).expect("serializable");
        assert_eq!(
            value,
            serde_json::json!({"prod": {"us-west-2": ["subnet-2", "subnet-1"]}})
        );
    }
}
