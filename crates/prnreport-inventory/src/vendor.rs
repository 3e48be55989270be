//! Vendor key map
//!
//! Each supported vendor keeps its printers in its own host group and exposes
//! the metrics under vendor-specific telemetry keys. Differences between
//! vendors live in this table, not in the collection code.

use crate::types::Metric;

/// Static description of one supported vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorProfile {
    /// Vendor name shown in the report
    pub vendor: &'static str,
    /// Host group holding this vendor's printers
    pub host_group: &'static str,
    /// Logical metric to exact telemetry key
    pub metric_keys: &'static [(Metric, &'static str)],
    /// Metrics with a fixed value instead of (or as fallback for) a key
    pub constants: &'static [(Metric, &'static str)],
}

impl VendorProfile {
    /// Exact telemetry keys to request, in declaration order
    #[must_use]
    pub fn exact_keys(&self) -> Vec<&'static str> {
        self.metric_keys.iter().map(|(_, key)| *key).collect()
    }

    /// Every logical metric this profile reports
    #[must_use]
    pub fn metrics(&self) -> Vec<Metric> {
        let mut metrics: Vec<Metric> = self
            .metric_keys
            .iter()
            .chain(self.constants)
            .map(|(metric, _)| *metric)
            .collect();
        metrics.sort();
        metrics.dedup();
        metrics
    }

    /// Constant declared for a metric
    #[must_use]
    pub fn constant(&self, metric: Metric) -> Option<&'static str> {
        self.constants
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, value)| *value)
    }
}

/// Kyocera devices report model, counter and serial through custom items
pub const KYOCERA: VendorProfile = VendorProfile {
    vendor: "Kyocera",
    host_group: "_Printers",
    metric_keys: &[
        (Metric::Model, "model.device"),
        (Metric::PageCount, "a4.device"),
        (Metric::SerialNumber, "sn.device"),
    ],
    constants: &[],
};

/// Brother devices are polled through the Printer-MIB, which has no model
pub const BROTHER: VendorProfile = VendorProfile {
    vendor: "Brother",
    host_group: "_Printers_Brother",
    metric_keys: &[
        (Metric::PageCount, "mib-2.43.10.2.1.4.1.1"),
        (Metric::SerialNumber, "mib-2.43.5.1.1.17.1"),
    ],
    constants: &[(Metric::Model, "Brother")],
};

/// Profiles processed on every run, in order
pub const VENDOR_PROFILES: &[VendorProfile] = &[KYOCERA, BROTHER];
