// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Deterministic core of a management-cluster admin surface.
//!
//! Two independent pieces compose here:
//!
//! - A small combinator system for declarative server-side filter predicates
//!   ([`filter`]), used to tell a paginated query service which cluster
//!   records to return or exclude.
//! - Pure display helpers for cluster lists: a lossy three-character name
//!   abbreviator, add-on chart labels, and a minimum Harvester version gate
//!   ([`cluster`]).
//!
//! Policies (hide the local cluster, show non-Kubernetes workload clusters)
//! are defined once and compiled into both a pagination filter and an
//! in-memory predicate, so the remote and local filtering paths always agree.
//! All I/O lives behind the accessor traits in [`store`]; everything else is
//! pure and synchronous.

pub mod cluster;
pub mod filter;
pub mod store;

pub use cluster::{
    CAPI_PROVIDER_LABEL, HARVESTER_CONTAINER_WORKLOAD_FEATURE, HIDE_LOCAL_CLUSTER_SETTING,
    HiddenLocalPolicy, ManagementCluster, VIRTUAL_HARVESTER_PROVIDER, WorkloadClusterPolicy,
    abbreviate_cluster_name, camel_to_title, filter_hidden_local_cluster,
    filter_only_kubernetes_clusters, harvester_version_satisfied, is_harvester_cluster,
    label_for_addon, pagination_filter_clusters, pagination_filter_hidden_local_cluster,
    pagination_filter_only_kubernetes_clusters,
};
pub use filter::{FieldPath, FilterField, FilterGroup, PathSegment, Scalar};
pub use store::{FeatureGates, Setting, SettingStore, Translator};
