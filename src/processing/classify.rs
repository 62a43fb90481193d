//! Target classification of raw subnet records.

use crate::error::Result;
use crate::models::{RawSubnetRecord, SubnetAttributes};

/// Yield the attributes of every record whose target equals `target`.
///
/// Attributes are built (and traced) for every record before the target check,
/// so a record missing a required key fails even when its target would not
/// match. Such a record yields `Err(MissingField)` and is logged at error level.
/// Iterating again over the same slice restarts the classification.
pub fn classify<'a>(
    records: &'a [RawSubnetRecord],
    target: &'a str,
) -> impl Iterator<Item = Result<SubnetAttributes>> + 'a {
    records
        .iter()
        .enumerate()
        .filter_map(move |(index, record)| match classify_one(record, index, target) {
            Ok(Some(attrs)) => Some(Ok(attrs)),
            Ok(None) => None,
            Err(e) => {
                log::error!("Gate subnet schema changed: {e}: {record:?}");
                Some(Err(e))
            }
        })
}

fn classify_one(
    record: &RawSubnetRecord,
    index: usize,
    target: &str,
) -> Result<Option<SubnetAttributes>> {
    let attrs = record.attributes(index)?;
    log::debug!("Subnet: {attrs}");
    Ok((record.target(index)? == target).then_some(attrs))
}
