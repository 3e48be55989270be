//! High-level collection API

use std::sync::Arc;

use prnreport_client::RpcTransport;
use tracing::{info, instrument, warn};

use crate::api::MonitoringApi;
use crate::error::{CollectError, SkipReason};
use crate::filter;
use crate::reconcile::reconcile;
use crate::session::{Credentials, Session};
use crate::types::{PrinterRecord, sort_records};
use crate::vendor::{VENDOR_PROFILES, VendorProfile};

/// Result of processing one vendor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorOutcome {
    /// Records built for the vendor's printers
    Collected(Vec<PrinterRecord>),
    /// Nothing to report for this vendor
    Skipped(SkipReason),
}

/// Printer inventory collector
///
/// Runs the whole pipeline sequentially: login, then for each vendor profile
/// group lookup, host listing, name filtering, item lookup and reconciliation.
pub struct PrinterCollector {
    api: MonitoringApi,
    profiles: Vec<VendorProfile>,
}

impl PrinterCollector {
    /// Create a collector for the built-in vendor profiles
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self {
            api: MonitoringApi::new(transport),
            profiles: VENDOR_PROFILES.to_vec(),
        }
    }

    /// Replace the vendor profiles
    #[must_use]
    pub fn with_profiles(mut self, profiles: Vec<VendorProfile>) -> Self {
        self.profiles = profiles;
        self
    }

    /// Collect every printer record, sorted by technical name
    ///
    /// # Errors
    /// Returns an error only if authentication fails. Vendors that cannot be
    /// processed are logged and skipped.
    #[instrument(skip(self, credentials))]
    pub async fn collect(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<PrinterRecord>, CollectError> {
        info!("collecting printer data");

        let session = self.api.authenticate(credentials).await?;

        let mut records = Vec::new();
        for profile in &self.profiles {
            match self.collect_vendor(&session, profile).await {
                VendorOutcome::Collected(mut vendor_records) => {
                    records.append(&mut vendor_records);
                }
                VendorOutcome::Skipped(reason) => {
                    warn!(
                        vendor = profile.vendor,
                        group = profile.host_group,
                        %reason,
                        "vendor skipped"
                    );
                }
            }
        }

        sort_records(&mut records);
        info!(count = records.len(), "collection completed");

        Ok(records)
    }

    /// Process a single vendor profile
    #[instrument(skip(self, session, profile), fields(vendor = profile.vendor))]
    pub async fn collect_vendor(
        &self,
        session: &Session,
        profile: &VendorProfile,
    ) -> VendorOutcome {
        info!(group = profile.host_group, "processing group");

        let Some(group_id) = self.api.resolve_group(session, profile.host_group).await else {
            return VendorOutcome::Skipped(SkipReason::GroupNotFound);
        };
        info!(%group_id, "group resolved");

        let hosts = self.api.list_active_hosts(session, &group_id).await;
        if hosts.is_empty() {
            return VendorOutcome::Skipped(SkipReason::NoActiveHosts);
        }
        info!(count = hosts.len(), "hosts in group");

        let printers: Vec<_> = hosts
            .into_iter()
            .filter(|h| filter::matches(&h.technical_name))
            .collect();
        info!(count = printers.len(), "hosts after name filter");
        if printers.is_empty() {
            return VendorOutcome::Skipped(SkipReason::NoMatchingHosts);
        }

        let host_ids: Vec<String> = printers.iter().map(|h| h.host_id.clone()).collect();
        let keys = profile.exact_keys();
        let items = self.api.resolve_items(session, &host_ids, &keys).await;

        if items.is_empty() {
            warn!(?keys, "no items found");
        } else {
            info!(count = items.len(), "items resolved");
        }

        VendorOutcome::Collected(reconcile(profile, &printers, &items))
    }
}
