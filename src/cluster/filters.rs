//! Policy-driven cluster filtering.
//!
//! Each policy is a single declarative value compiled into two
//! representations: a pagination [`FilterGroup`] pushed down to the backing
//! query service, and an in-memory predicate applied to fully materialized
//! collections. Both paths read the same policy state, so they cannot drift.

use anyhow::Result;
use tracing::debug;

use crate::filter::{FieldPath, FilterField, FilterGroup};
use crate::store::{FeatureGates, SettingStore};

use super::{
    CAPI_PROVIDER_LABEL, HARVESTER_CONTAINER_WORKLOAD_FEATURE, HIDE_LOCAL_CLUSTER_SETTING,
    ManagementCluster, VIRTUAL_HARVESTER_PROVIDER, is_harvester_cluster,
};

/// Policy: hide the local (management plane) cluster from cluster lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenLocalPolicy {
    hide_local: bool,
}

impl HiddenLocalPolicy {
    /// Read the `hide-local-cluster` setting. The configured value wins over
    /// the server default; both absent resolves to off.
    pub fn load(settings: &impl SettingStore) -> Result<Self> {
        let setting = settings
            .setting(HIDE_LOCAL_CLUSTER_SETTING)?
            .unwrap_or_default();
        let hide_local = setting.resolve_or("false") == "true";
        Ok(Self { hide_local })
    }

    /// Server-side form: a single predicate returning only non-internal
    /// clusters. `None` when the policy is off (no group at all, not an
    /// empty group).
    pub fn pagination_filter(&self) -> Option<FilterGroup> {
        if !self.hide_local {
            return None;
        }

        debug!("hiding local cluster via pagination filter");
        Some(FilterGroup::multiple_fields(vec![FilterField::new(
            FieldPath::key("spec").then("internal"),
            false,
        )]))
    }

    /// In-memory form: whether a record survives the policy.
    pub fn retains(&self, cluster: &ManagementCluster) -> bool {
        !self.hide_local || !cluster.is_local()
    }
}

/// Policy: whether Harvester-backed (virtual provider) clusters appear in
/// container workload cluster lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadClusterPolicy {
    show_harvester_workloads: bool,
}

impl WorkloadClusterPolicy {
    /// Read the Harvester container workload feature flag.
    pub fn load(features: &impl FeatureGates) -> Result<Self> {
        let show_harvester_workloads =
            features.feature_enabled(HARVESTER_CONTAINER_WORKLOAD_FEATURE)?;
        Ok(Self {
            show_harvester_workloads,
        })
    }

    /// Server-side form: when the feature is off, exclude clusters whose
    /// provider signal is the Harvester sentinel.
    ///
    /// The provider may live in the CAPI label or in `status.provider`
    /// depending on record version, so one predicate is emitted per location.
    /// Both must be preserved; the query layer is responsible for combining
    /// same-intent predicates across the two fields.
    pub fn pagination_filter(&self) -> Option<FilterGroup> {
        if self.show_harvester_workloads {
            return None;
        }

        debug!("excluding harvester clusters via pagination filter");
        Some(FilterGroup::multiple_fields(vec![
            FilterField::new(
                FieldPath::key("metadata")
                    .then("labels")
                    .then_literal(CAPI_PROVIDER_LABEL),
                VIRTUAL_HARVESTER_PROVIDER,
            )
            .not_equals()
            .exact(),
            FilterField::new(
                FieldPath::key("status").then("provider"),
                VIRTUAL_HARVESTER_PROVIDER,
            )
            .not_equals()
            .exact(),
        ]))
    }

    /// In-memory form: whether a record survives the policy.
    pub fn retains(&self, cluster: &ManagementCluster) -> bool {
        self.show_harvester_workloads || !is_harvester_cluster(cluster)
    }
}

/// Combined pagination filters for cluster lists: the Harvester exclusion
/// group first (when the workload feature is off), then the hidden-local
/// group (when the setting is on). Inactive policies contribute nothing.
pub fn pagination_filter_clusters(
    settings: &impl SettingStore,
    features: &impl FeatureGates,
) -> Result<Vec<FilterGroup>> {
    let mut groups = Vec::new();

    if let Some(group) = pagination_filter_only_kubernetes_clusters(features)? {
        groups.push(group);
    }
    if let Some(group) = pagination_filter_hidden_local_cluster(settings)? {
        groups.push(group);
    }

    Ok(groups)
}

/// Pagination form of the hidden-local-cluster policy.
pub fn pagination_filter_hidden_local_cluster(
    settings: &impl SettingStore,
) -> Result<Option<FilterGroup>> {
    Ok(HiddenLocalPolicy::load(settings)?.pagination_filter())
}

/// Pagination form of the Kubernetes-clusters-only policy.
pub fn pagination_filter_only_kubernetes_clusters(
    features: &impl FeatureGates,
) -> Result<Option<FilterGroup>> {
    Ok(WorkloadClusterPolicy::load(features)?.pagination_filter())
}

/// In-memory equivalent of [`pagination_filter_hidden_local_cluster`] for
/// fully materialized collections. Returns a fresh collection.
pub fn filter_hidden_local_cluster(
    clusters: Vec<ManagementCluster>,
    settings: &impl SettingStore,
) -> Result<Vec<ManagementCluster>> {
    let policy = HiddenLocalPolicy::load(settings)?;
    Ok(clusters.into_iter().filter(|c| policy.retains(c)).collect())
}

/// In-memory equivalent of [`pagination_filter_only_kubernetes_clusters`] for
/// fully materialized collections. Returns a fresh collection.
pub fn filter_only_kubernetes_clusters(
    clusters: Vec<ManagementCluster>,
    features: &impl FeatureGates,
) -> Result<Vec<ManagementCluster>> {
    let policy = WorkloadClusterPolicy::load(features)?;
    Ok(clusters.into_iter().filter(|c| policy.retains(c)).collect())
}
