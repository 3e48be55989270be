//! Host and item join

use std::collections::{BTreeMap, HashMap};

use crate::types::{Host, MetricValue, PrinterRecord, ResolvedItem};
use crate::vendor::VendorProfile;

/// Build one record per host from the items resolved for a vendor
///
/// Every metric the profile declares ends up in the record. A resolved item
/// wins over a profile constant, a constant wins over the unknown marker.
/// When several items share a `(host, key)` pair the first one in response
/// order is used.
#[must_use]
pub fn reconcile(
    profile: &VendorProfile,
    hosts: &[Host],
    items: &[ResolvedItem],
) -> Vec<PrinterRecord> {
    let mut index: HashMap<(&str, &str), &str> = HashMap::with_capacity(items.len());
    for item in items {
        index
            .entry((item.host_id.as_str(), item.key.as_str()))
            .or_insert(item.last_value.as_str());
    }

    hosts
        .iter()
        .map(|host| {
            let mut metrics = BTreeMap::new();

            for &(metric, value) in profile.constants {
                metrics.insert(metric, MetricValue::Known(value.to_string()));
            }

            for &(metric, key) in profile.metric_keys {
                match index.get(&(host.host_id.as_str(), key)) {
                    Some(value) => {
                        metrics.insert(metric, MetricValue::Known((*value).to_string()));
                    }
                    None => {
                        metrics.entry(metric).or_insert(MetricValue::Unknown);
                    }
                }
            }

            PrinterRecord {
                technical_name: host.technical_name.clone(),
                display_name: host.display_name.clone(),
                ip_address: MetricValue::from(host.ip_address.clone()),
                vendor: profile.vendor.to_string(),
                metrics,
            }
        })
        .collect()
}
