use indexmap::IndexMap;
use log::debug;
use std::cmp::Ordering;

use super::config::LeadTimeMode;
use super::grouping::ReleasesByGroup;
use super::success_index::SuccessIndex;
use crate::reports::GroupLeadTime;

/// Minutes from intermediate success to terminal success, for every version
/// that succeeded in both environments.
pub fn join_lead_times<'a>(
    intermediate: &SuccessIndex,
    terminal: &'a SuccessIndex,
    mode: LeadTimeMode,
) -> IndexMap<&'a str, f64> {
    terminal
        .iter()
        .filter_map(|(version, live_at)| {
            let started_at = intermediate.get(version)?;
            let minutes = mode.minutes(live_at - started_at);

            if minutes < 0.0 {
                debug!("Release {version} reached the terminal environment {minutes:.2} minutes before the intermediate one");
            }

            Some((version, minutes))
        })
        .collect()
}

pub fn average_lead_times(
    groups: &ReleasesByGroup<'_>,
    intermediate: &SuccessIndex,
    terminal: &SuccessIndex,
    mode: LeadTimeMode,
) -> Vec<GroupLeadTime> {
    let lead_times = join_lead_times(intermediate, terminal, mode);

    let mut averages: Vec<GroupLeadTime> = collect_group_values(groups, &lead_times)
        .into_iter()
        .map(|(project_group, values)| GroupLeadTime {
            project_group,
            average_minutes: compute_mean(&values),
        })
        .collect();

    // Longest first; sort_by is stable so ties keep group order
    averages.sort_by(|a, b| {
        b.average_minutes
            .partial_cmp(&a.average_minutes)
            .unwrap_or(Ordering::Equal)
    });

    averages
}

fn collect_group_values(
    groups: &ReleasesByGroup<'_>,
    lead_times: &IndexMap<&str, f64>,
) -> IndexMap<Option<String>, Vec<f64>> {
    let mut values: IndexMap<Option<String>, Vec<f64>> = IndexMap::new();

    for (group, releases) in groups {
        for release in releases {
            if let Some(&minutes) = lead_times.get(release.version.as_str()) {
                values.entry(group.clone()).or_default().push(minutes);
            }
        }
    }

    values
}

#[allow(clippy::cast_precision_loss)]
fn compute_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
