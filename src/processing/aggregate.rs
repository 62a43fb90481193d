//! Grouping of classified subnets into account/region indexes.

use crate::models::{Aggregation, SubnetAttributes};

/// Fold classified subnets into zone sets and purpose-restricted id lists.
///
/// Every subnet contributes its availability zone. Only subnets whose purpose
/// equals `purpose` contribute their id, appended in arrival order.
pub fn aggregate<I>(attrs: I, purpose: &str) -> Aggregation
where
    I: IntoIterator<Item = SubnetAttributes>,
{
    let mut aggregation = Aggregation::default();

    for subnet in attrs {
        let SubnetAttributes {
            account,
            availability_zone,
            subnet_id,
            subnet_purpose,
            subnet_region,
        } = subnet;

        aggregation
            .availability_zones
            .entry(&account, &subnet_region)
            .insert(availability_zone);

        if subnet_purpose == purpose {
            aggregation
                .subnet_ids
                .entry(&account, &subnet_region)
                .push(subnet_id);
        }

        log::debug!(
            "{account} regions: {:?}",
            aggregation.availability_zones.regions(&account)
        );
    }

    log::debug!("AZ dict:\n{}", aggregation.availability_zones);
    aggregation
}
