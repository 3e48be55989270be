//! Inventory type definitions

use std::collections::BTreeMap;
use std::fmt;

/// Placeholder written wherever a value could not be resolved
pub const UNKNOWN_MARKER: &str = "N/A";

// ============================================================================
// Metrics
// ============================================================================

/// Logical metric reported per printer
///
/// Declaration order is the report column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    /// Device model
    Model,
    /// Serial number
    SerialNumber,
    /// Total printed pages
    PageCount,
}

/// A metric value or the unknown marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricValue {
    /// Value retrieved from the platform or declared by the vendor profile
    Known(String),
    /// Nothing could be resolved
    Unknown,
}

impl MetricValue {
    /// Text shown in the report
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            MetricValue::Known(value) => value,
            MetricValue::Unknown => UNKNOWN_MARKER,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Option<String>> for MetricValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(MetricValue::Unknown, MetricValue::Known)
    }
}

// ============================================================================
// Directory
// ============================================================================

/// Monitored host as returned by the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    /// Platform identifier
    pub host_id: String,
    /// Technical name, used for filtering and ordering
    pub technical_name: String,
    /// Human-readable display name
    pub display_name: String,
    /// IP of the first network interface
    pub ip_address: Option<String>,
}

/// Latest value of one telemetry key on one host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    pub host_id: String,
    pub key: String,
    pub last_value: String,
}

// ============================================================================
// Output
// ============================================================================

/// One normalized printer, ready for the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterRecord {
    /// Technical name of the host
    pub technical_name: String,
    /// Display name of the host
    pub display_name: String,
    /// First interface IP or the unknown marker
    pub ip_address: MetricValue,
    /// Vendor whose profile produced this record
    pub vendor: String,
    /// Every metric declared by the vendor profile
    pub metrics: BTreeMap<Metric, MetricValue>,
}

impl PrinterRecord {
    /// Value of a metric; undeclared metrics read as unknown
    #[must_use]
    pub fn metric(&self, metric: Metric) -> &MetricValue {
        self.metrics.get(&metric).unwrap_or(&MetricValue::Unknown)
    }
}

/// Sort records by technical name
///
/// Stable, so re-sorting an ordered sequence leaves it unchanged.
pub fn sort_records(records: &mut [PrinterRecord]) {
    records.sort_by(|a, b| a.technical_name.cmp(&b.technical_name));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> PrinterRecord {
        PrinterRecord {
            technical_name: name.to_string(),
            display_name: format!("Printer {name}"),
            ip_address: MetricValue::Unknown,
            vendor: "Kyocera".to_string(),
            metrics: BTreeMap::new(),
        }
    }

    #[test]
    fn test_unknown_marker() {
        assert_eq!(MetricValue::Unknown.to_string(), "N/A");
        assert_eq!(MetricValue::Known("42".into()).as_str(), "42");
        assert_eq!(MetricValue::from(None), MetricValue::Unknown);
    }

    #[test]
    fn test_metric_order_matches_columns() {
        let mut metrics = vec![Metric::PageCount, Metric::Model, Metric::SerialNumber];
        metrics.sort();
        assert_eq!(
            metrics,
            vec![Metric::Model, Metric::SerialNumber, Metric::PageCount]
        );
    }

    #[test]
    fn test_undeclared_metric_reads_unknown() {
        let r = record("1001-P01");
        assert_eq!(r.metric(Metric::Model), &MetricValue::Unknown);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut records = vec![record("2000-P02"), record("1000-P10"), record("2000-P01")];
        sort_records(&mut records);
        let names: Vec<_> = records.iter().map(|r| r.technical_name.as_str()).collect();
        assert_eq!(names, ["1000-P10", "2000-P01", "2000-P02"]);

        let before = records.clone();
        sort_records(&mut records);
        assert_eq!(records, before);
    }
}
