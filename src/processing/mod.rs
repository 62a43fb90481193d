//! Subnet data processing logic.
//!
//! This module contains the stages applied to a fetched inventory:
//! - [`classify`] - filter records by target and normalize them
//! - [`aggregate`] - group zones and subnet ids by account and region
//! - [`narrow`] - project the groups onto one account/region

mod aggregate;
mod classify;
mod narrow;

// Re-export public functions
pub use aggregate::aggregate;
pub use classify::classify;
pub use narrow::narrow;
