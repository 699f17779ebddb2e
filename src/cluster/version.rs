// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Minimum Harvester version gate.
//!
//! Harvester support landed mid-patch in the `v1.21.4+rke2r` line, so that
//! line is compared by its RKE2 revision number. Everything else is coerced
//! to a plain semantic version and checked against the minimum release.
//! Build metadata carries no precedence under semver 2.0, which is why the
//! general path reduces to `>=1.21.4`.

use std::sync::LazyLock;

use regex::Regex;
use semver::{Version, VersionReq};

/// The RKE2 line where the minimum is a revision, not a release.
const RKE2_PATCH_LINE: &str = "v1.21.4+rke2r";

/// Minimum RKE2 revision within [`RKE2_PATCH_LINE`].
const MIN_RKE2_REVISION: u64 = 4;

/// Strips everything up to and including the last `rke2r` marker.
static RKE2_REVISION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i).+rke2r").unwrap());

/// Leading `major[.minor[.patch]]` digit run of a version-ish string.
static COERCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").unwrap());

static MINIMUM: LazyLock<VersionReq> = LazyLock::new(|| VersionReq::parse(">=1.21.4").unwrap());

/// Whether a cluster at `version` meets the minimum Harvester-capable
/// release (`v1.21.4+rke2r4`). Empty or uncoercible versions fail the check.
pub fn harvester_version_satisfied(version: &str) -> bool {
    if version.starts_with(RKE2_PATCH_LINE) {
        let revision = RKE2_REVISION.replace(version, "");
        return revision
            .parse::<u64>()
            .map(|r| r >= MIN_RKE2_REVISION)
            .unwrap_or(false);
    }

    match coerce(version) {
        Some(parsed) => MINIMUM.matches(&parsed),
        None => false,
    }
}

/// Best-effort coercion to a semantic version: the first run of
/// `major[.minor[.patch]]` digits, with missing parts zeroed. Returns `None`
/// when no digits are found or a component overflows.
fn coerce(version: &str) -> Option<Version> {
    let caps = COERCE.captures(version)?;
    let component = |i: usize| match caps.get(i) {
        Some(m) => m.as_str().parse().ok(),
        None => Some(0),
    };

    Some(Version::new(component(1)?, component(2)?, component(3)?))
}
