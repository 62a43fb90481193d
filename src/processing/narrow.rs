//! Projection of an aggregation onto one account/region.

use crate::error::{Result, SubnetError};
use crate::models::{Aggregation, ScopedResult};

/// Zones and ids of `env`/`region`.
///
/// Fails with [`SubnetError::SubnetScope`] when either index lacks the pair;
/// nothing is returned for the half that was found.
pub fn narrow(aggregation: &Aggregation, env: &str, region: &str) -> Result<ScopedResult> {
    let scope_error = || SubnetError::SubnetScope {
        env: env.to_string(),
        region: region.to_string(),
    };

    let Some(zones) = aggregation.availability_zones.get(env, region) else {
        log::error!(
            "Missing key while setting Region: {}",
            aggregation.availability_zones
        );
        return Err(scope_error());
    };

    let Some(ids) = aggregation.subnet_ids.get(env, region) else {
        log::error!(
            "Missing key while setting Subnet IDs: {}",
            aggregation.subnet_ids
        );
        return Err(scope_error());
    };

    let scoped = ScopedResult::new(region, zones.clone(), ids.clone());
    log::debug!("Region dict: {scoped:?}");
    Ok(scoped)
}
