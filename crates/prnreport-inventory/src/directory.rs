//! Host group and host lookups

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::api::MonitoringApi;
use crate::request::requests;
use crate::session::Session;
use crate::types::Host;

#[derive(Debug, Deserialize)]
struct GroupRow {
    groupid: String,
}

#[derive(Debug, Deserialize)]
struct InterfaceRow {
    ip: String,
}

#[derive(Debug, Deserialize)]
struct HostRow {
    hostid: String,
    host: String,
    name: String,
    #[serde(default)]
    interfaces: Vec<InterfaceRow>,
}

impl From<HostRow> for Host {
    fn from(row: HostRow) -> Self {
        Host {
            host_id: row.hostid,
            technical_name: row.host,
            display_name: row.name,
            ip_address: row.interfaces.into_iter().next().map(|i| i.ip),
        }
    }
}

impl MonitoringApi {
    /// Resolve a host group name to its id
    ///
    /// Returns `None` when no group has that exact name or the lookup failed.
    #[instrument(skip(self, session))]
    pub async fn resolve_group(&self, session: &Session, group_name: &str) -> Option<String> {
        let rows: Vec<GroupRow> = self
            .fetch(
                &requests::host_group_by_name(group_name),
                Some(session.token()),
            )
            .await?;

        let group_id = rows.into_iter().next().map(|g| g.groupid);
        debug!(?group_id, "group lookup completed");
        group_id
    }

    /// List the active hosts of a group with their first interface IP
    ///
    /// A failed lookup reads as an empty group.
    #[instrument(skip(self, session))]
    pub async fn list_active_hosts(&self, session: &Session, group_id: &str) -> Vec<Host> {
        let rows: Vec<HostRow> = self
            .fetch(&requests::active_hosts(group_id), Some(session.token()))
            .await
            .unwrap_or_default();

        rows.into_iter().map(Host::from).collect()
    }
}
