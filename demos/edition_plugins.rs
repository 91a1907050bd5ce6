//! Resolves the plugins of an edition, installing each release once.
//!
//! Run with `RUST_LOG=debug cargo run --example edition_plugins` to also see
//! the failure events emitted by the collectors.

use std::collections::HashSet;

use strict_collect::{
    collections::ToSet,
    error::Result,
    index::{Index, UniqueIndex},
    prelude::*,
    string::{Delimited, Join},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Release {
    key: &'static str,
    version: &'static str,
}

const fn release(key: &'static str, version: &'static str) -> Release {
    Release { key, version }
}

/// The releases to install for `plugin_key`, its dependencies included.
fn installable_releases(plugin_key: &str) -> Vec<Release> {
    match plugin_key {
        "cobol" => vec![release("cobol", "4.2"), release("license", "3.1")],
        "pli" => vec![release("pli", "1.9"), release("license", "3.1")],
        "governance" => vec![release("governance", "2.0"), release("report", "1.4")],
        _ => vec![],
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let edition = ["cobol", "pli", "governance"];

    // Shared dependencies are resolved more than once, the set keeps one of each.
    let to_install: HashSet<Release> = edition
        .iter()
        .flat_map(|key| installable_releases(key))
        .collect_with(&ToSet::new());
    info!(count = to_install.len(), "releases to install");

    let mut keys: Vec<_> = to_install.iter().map(|release| release.key).collect();
    keys.sort_unstable();
    let listed = keys.iter().collect_with(&Join::new(Delimited::new(", ")))?;
    info!(plugins = %listed, "downloading");

    let by_key = UniqueIndex::with_values(|r: &Release| r.key, |r: Release| r.version);
    let versions = by_key.collect_from(to_install.iter().cloned())?;
    info!(license = versions["license"], "license plugin pinned");

    let by_major = Index::new(|r: &Release| r.version.split('.').next().unwrap_or_default());
    let majors = by_major.collect_from(to_install.iter().cloned())?;
    for major in ["1", "2", "3", "4"] {
        info!(major, count = majors.get_all(major).len(), "releases per major");
    }

    // A second version of an already resolved plugin must not sneak in.
    let conflicting = [release("cobol", "4.2"), release("cobol", "5.0")];
    if let Err(err) = by_key.collect_from(conflicting) {
        warn!(error = %err, "edition rejected");
    }

    Ok(())
}
