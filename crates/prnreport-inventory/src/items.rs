//! Telemetry item lookups

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::api::MonitoringApi;
use crate::request::requests;
use crate::session::Session;
use crate::types::ResolvedItem;

#[derive(Debug, Deserialize)]
struct ItemRow {
    hostid: String,
    key_: String,
    #[serde(default)]
    lastvalue: String,
}

impl MonitoringApi {
    /// Fetch the latest value of each exact key on the given hosts
    ///
    /// Empty `host_ids` or `keys` return nothing without a remote call. A
    /// failed lookup reads as no items.
    #[instrument(skip(self, session, host_ids), fields(hosts = host_ids.len()))]
    pub async fn resolve_items(
        &self,
        session: &Session,
        host_ids: &[String],
        keys: &[&str],
    ) -> Vec<ResolvedItem> {
        if host_ids.is_empty() || keys.is_empty() {
            debug!("nothing to resolve");
            return Vec::new();
        }

        let rows: Vec<ItemRow> = self
            .fetch(&requests::items(host_ids, keys), Some(session.token()))
            .await
            .unwrap_or_default();

        rows.into_iter()
            .map(|row| ResolvedItem {
                host_id: row.hostid,
                key: row.key_,
                last_value: row.lastvalue,
            })
            .collect()
    }
}
