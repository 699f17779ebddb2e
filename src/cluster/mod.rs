// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Management cluster records and the policies applied to them.
//!
//! The record type mirrors the shape served by the management API: provider
//! information may live in a CAPI label or in `status.provider` depending on
//! how the cluster was provisioned, and the local-cluster flag may sit on the
//! record itself or on a nested management reference. The helpers here
//! normalize both.

mod abbrev;
mod addon;
mod filters;
mod version;

pub use abbrev::abbreviate_cluster_name;
pub use addon::{camel_to_title, label_for_addon};
pub use filters::{
    HiddenLocalPolicy, WorkloadClusterPolicy, filter_hidden_local_cluster,
    filter_only_kubernetes_clusters, pagination_filter_clusters,
    pagination_filter_hidden_local_cluster, pagination_filter_only_kubernetes_clusters,
};
pub use version::harvester_version_satisfied;

use std::collections::BTreeMap;

use serde::Deserialize;

/// Label carrying the provisioning provider on management clusters.
pub const CAPI_PROVIDER_LABEL: &str = "provider.cattle.io";

/// Provider value marking clusters backed by the Harvester virtualization
/// provider rather than a plain Kubernetes distribution.
pub const VIRTUAL_HARVESTER_PROVIDER: &str = "harvester";

/// Management setting controlling whether the local cluster is hidden from
/// cluster lists.
pub const HIDE_LOCAL_CLUSTER_SETTING: &str = "hide-local-cluster";

/// Feature flag: surface Harvester bare-metal clusters as container workload
/// clusters.
pub const HARVESTER_CONTAINER_WORKLOAD_FEATURE: &str = "harvester-baremetal-container-workload";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClusterMeta {
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClusterSpec {
    /// Set on the management plane's own (local) cluster record.
    #[serde(default)]
    pub internal: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClusterStatus {
    #[serde(default)]
    pub provider: Option<String>,
}

/// Reference to the management cluster backing a provisioning-level record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MgmtRef {
    #[serde(default)]
    pub is_local: bool,
}

/// Management cluster record, consumed read-only.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagementCluster {
    #[serde(default)]
    pub metadata: ClusterMeta,
    #[serde(default)]
    pub spec: ClusterSpec,
    #[serde(default)]
    pub status: ClusterStatus,
    /// Set when this record directly represents the local cluster.
    #[serde(default)]
    pub is_local: bool,
    /// Present on records that carry the local flag on a nested management
    /// reference instead of on themselves.
    #[serde(default)]
    pub mgmt: Option<MgmtRef>,
}

impl ManagementCluster {
    /// Whether this record represents the local (management plane) cluster.
    /// The nested management reference wins when present.
    pub fn is_local(&self) -> bool {
        match &self.mgmt {
            Some(mgmt) => mgmt.is_local,
            None => self.is_local,
        }
    }

    /// Provider signal: the CAPI provider label when set and non-empty,
    /// falling back to `status.provider`.
    pub fn provider(&self) -> Option<&str> {
        self.metadata
            .labels
            .get(CAPI_PROVIDER_LABEL)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
            .or(self.status.provider.as_deref())
    }
}

/// Whether a cluster is backed by the Harvester virtualization provider.
pub fn is_harvester_cluster(cluster: &ManagementCluster) -> bool {
    cluster.provider() == Some(VIRTUAL_HARVESTER_PROVIDER)
}
