use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use super::grouping::ReleasesByGroup;

/// Release version to the timestamp of a successful deployment to one environment.
///
/// When a version has several successful deployments, the one encountered last
/// in dataset order wins, regardless of which is chronologically latest.
#[derive(Debug, Default, Clone)]
pub struct SuccessIndex {
    entries: IndexMap<String, DateTime<Utc>>,
}

impl SuccessIndex {
    pub fn build(groups: &ReleasesByGroup<'_>, environment: &str, success_state: &str) -> Self {
        let mut entries = IndexMap::new();

        for release in groups.values().flatten() {
            for deployment in &release.deployments {
                if deployment.environment == environment && deployment.state == success_state {
                    entries.insert(release.version.clone(), deployment.created);
                }
            }
        }

        Self { entries }
    }

    pub fn get(&self, version: &str) -> Option<DateTime<Utc>> {
        self.entries.get(version).copied()
    }

    pub fn contains(&self, version: &str) -> bool {
        self.entries.contains_key(version)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, DateTime<Utc>)> {
        self.entries.iter().map(|(v, t)| (v.as_str(), *t))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
