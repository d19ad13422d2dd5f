use indexmap::{IndexMap, IndexSet};

use super::grouping::ReleasesByGroup;
use super::success_index::SuccessIndex;
use crate::reports::GroupStalledReleases;

/// Versions that succeeded in the intermediate environment but never in the terminal one.
pub fn stalled_versions<'a>(
    intermediate: &'a SuccessIndex,
    terminal: &SuccessIndex,
) -> IndexSet<&'a str> {
    intermediate
        .iter()
        .map(|(version, _)| version)
        .filter(|version| !terminal.contains(version))
        .collect()
}

pub fn count_stalled_releases(
    groups: &ReleasesByGroup<'_>,
    intermediate: &SuccessIndex,
    terminal: &SuccessIndex,
) -> Vec<GroupStalledReleases> {
    let stalled = stalled_versions(intermediate, terminal);

    let counts = groups
        .iter()
        .flat_map(|(group, releases)| releases.iter().map(move |r| (group, r)))
        .filter(|(_, release)| stalled.contains(release.version.as_str()))
        .fold(IndexMap::new(), |mut counts, (group, _)| {
            *counts.entry(group.clone()).or_insert(0_usize) += 1;
            counts
        });

    let mut result: Vec<GroupStalledReleases> = counts
        .into_iter()
        .map(|(project_group, failed_releases)| GroupStalledReleases {
            project_group,
            failed_releases,
        })
        .collect();

    // Highest first; ties keep group order
    result.sort_by(|a, b| b.failed_releases.cmp(&a.failed_releases));
    result
}
