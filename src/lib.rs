//! Subnet resolution for deployment placement.
//!
//! Fetches every AWS subnet known to Spinnaker Gate and reshapes it into
//! availability zones and subnet ids per account and region:
//! - [`inventory`] - where subnet records come from
//! - [`processing`] - classify, aggregate and narrow
//! - [`resolver`] - the `get_subnets` call
//! - [`output`] - printing results

pub mod config;
pub mod error;
pub mod inventory;
pub mod models;
pub mod output;
pub mod processing;
pub mod resolver;

pub use error::{Result, SubnetError};
pub use inventory::{FileInventory, GateClient, RetryPolicy, SubnetInventory};
pub use models::{
    AccountAzIndex, Aggregation, RawSubnetRecord, ScopedResult, SubnetAttributes, SubnetIdIndex,
    Subnets,
};
pub use resolver::{get_subnets, SubnetQuery, SubnetResolver};
