//! prnreport-inventory: printer data collection
//!
//! Discovers printers in the monitoring platform by host group and naming
//! convention, fetches per-vendor telemetry and joins it into one
//! [`PrinterRecord`] per device.

pub mod api;
pub mod collector;
pub mod directory;
pub mod error;
pub mod filter;
pub mod items;
pub mod reconcile;
pub mod request;
pub mod session;
pub mod types;
pub mod vendor;

pub use api::MonitoringApi;
pub use collector::{PrinterCollector, VendorOutcome};
pub use error::{CollectError, SkipReason};
pub use session::{Credentials, Session};
pub use types::{Metric, MetricValue, PrinterRecord, UNKNOWN_MARKER};
pub use vendor::{VENDOR_PROFILES, VendorProfile};
