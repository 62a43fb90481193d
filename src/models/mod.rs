//! Domain models for subnet resolution.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`RawSubnetRecord`] and [`SubnetAttributes`] - Gate subnet records
//! - [`RegionIndex`] - account/region keyed indexes
//! - [`Aggregation`], [`ScopedResult`] and [`Subnets`] - resolver results

mod index;
mod resolution;
mod subnet;

// Re-export public types
pub use index::{AccountAzIndex, RegionIndex, SubnetIdIndex};
pub use resolution::{Aggregation, ScopedResult, Subnets};
pub use subnet::{RawSubnetRecord, SubnetAttributes};
