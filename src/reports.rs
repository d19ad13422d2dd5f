use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analytics::LeadTimeMode;

#[derive(Debug, Serialize)]
pub struct ReleaseReports {
    pub generated_at: DateTime<Utc>,
    pub total_projects: usize,
    pub total_releases: usize,
    pub total_deployments: usize,
    pub lead_time_mode: LeadTimeMode,
    pub deployment_frequency: Vec<WeekdayCount>,
    pub lead_times: Vec<GroupLeadTime>,
    pub stalled_releases: Vec<GroupStalledReleases>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    pub day: String,
    pub deployments: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupLeadTime {
    pub project_group: Option<String>,
    pub average_minutes: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupStalledReleases {
    pub project_group: Option<String>,
    pub failed_releases: usize,
}
