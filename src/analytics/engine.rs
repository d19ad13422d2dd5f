use chrono::Utc;
use log::{info, warn};

use super::config::AnalysisConfig;
use super::grouping::group_releases;
use super::lead_time::average_lead_times;
use super::stalled::count_stalled_releases;
use super::success_index::SuccessIndex;
use super::weekday::deployment_frequency;
use crate::dataset::Dataset;
use crate::error::{DeployLensError, Result};
use crate::reports::ReleaseReports;

pub struct ReleaseAnalyzer {
    config: AnalysisConfig,
}

impl ReleaseAnalyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn analyze(&self, dataset: &Dataset) -> Result<ReleaseReports> {
        let config = &self.config;

        if dataset.projects.is_empty() {
            warn!("Dataset contains no projects");
        }

        self.check_versions(dataset)?;

        info!("Counting {} deployments by weekday...", config.terminal_env);
        let deployment_frequency = deployment_frequency(&dataset.projects, &config.terminal_env);

        let groups = group_releases(&dataset.projects);
        info!("Grouped releases into {} project groups", groups.len());

        let intermediate =
            SuccessIndex::build(&groups, &config.intermediate_env, &config.success_state);
        let terminal = SuccessIndex::build(&groups, &config.terminal_env, &config.success_state);
        info!(
            "Indexed {} successful {} releases and {} successful {} releases",
            intermediate.len(),
            config.intermediate_env,
            terminal.len(),
            config.terminal_env
        );

        if terminal.is_empty() {
            warn!(
                "No successful {} deployments found; lead time report will be empty",
                config.terminal_env
            );
        }

        let lead_times =
            average_lead_times(&groups, &intermediate, &terminal, config.lead_time_mode);
        let stalled_releases = count_stalled_releases(&groups, &intermediate, &terminal);

        info!(
            "Computed lead times for {} groups and stalled releases for {} groups",
            lead_times.len(),
            stalled_releases.len()
        );

        Ok(ReleaseReports {
            generated_at: Utc::now(),
            total_projects: dataset.projects.len(),
            total_releases: dataset.releases().count(),
            total_deployments: dataset.deployments().count(),
            lead_time_mode: config.lead_time_mode,
            deployment_frequency,
            lead_times,
            stalled_releases,
        })
    }

    fn check_versions(&self, dataset: &Dataset) -> Result<()> {
        let duplicates = dataset.duplicate_versions();
        if duplicates.is_empty() {
            return Ok(());
        }

        if self.config.strict_versions {
            return Err(DeployLensError::DuplicateVersions(duplicates));
        }

        warn!(
            "{} release versions appear more than once; their deployments are merged: {}",
            duplicates.len(),
            duplicates.join(", ")
        );
        Ok(())
    }
}
