use chrono::TimeDelta;
use clap::ValueEnum;
use serde::Serialize;

use crate::error::{DeployLensError, Result};

pub const DEFAULT_INTERMEDIATE_ENV: &str = "Integration";
pub const DEFAULT_TERMINAL_ENV: &str = "Live";
pub const DEFAULT_SUCCESS_STATE: &str = "Success";

const SECONDS_PER_DAY: i64 = 86_400;

/// How the gap between two deployments is turned into minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadTimeMode {
    /// Total elapsed minutes, including whole days.
    #[default]
    Elapsed,
    /// Whole seconds of the gap modulo one day, as minutes. Days are dropped.
    SubDay,
}

impl LeadTimeMode {
    pub fn minutes(self, delta: TimeDelta) -> f64 {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Elapsed => delta.num_milliseconds() as f64 / 60_000.0,
            Self::SubDay => {
                let seconds = delta.num_milliseconds().div_euclid(1000);
                #[allow(clippy::cast_precision_loss)]
                let minutes = seconds.rem_euclid(SECONDS_PER_DAY) as f64 / 60.0;
                minutes
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub intermediate_env: String,
    pub terminal_env: String,
    pub success_state: String,
    pub lead_time_mode: LeadTimeMode,
    pub strict_versions: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            intermediate_env: DEFAULT_INTERMEDIATE_ENV.to_string(),
            terminal_env: DEFAULT_TERMINAL_ENV.to_string(),
            success_state: DEFAULT_SUCCESS_STATE.to_string(),
            lead_time_mode: LeadTimeMode::default(),
            strict_versions: false,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if self.intermediate_env.is_empty() || self.terminal_env.is_empty() {
            return Err(DeployLensError::Config(
                "Environment names must not be empty".to_string(),
            ));
        }

        if self.intermediate_env == self.terminal_env {
            return Err(DeployLensError::Config(format!(
                "Intermediate and terminal environments must differ (both are '{}')",
                self.terminal_env
            )));
        }

        if self.success_state.is_empty() {
            return Err(DeployLensError::Config(
                "Success state must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::parse_timestamp;

    fn delta(from: &str, to: &str) -> TimeDelta {
        parse_timestamp(to).unwrap() - parse_timestamp(from).unwrap()
    }

    #[test]
    fn test_elapsed_minutes_span_days() {
        let gap = delta("2015-02-22T22:41:00.000Z", "2015-02-25T08:57:04.000Z");

        // 2 days, 10 hours, 16 minutes, 4 seconds
        let expected = 2.0 * 1440.0 + 10.0 * 60.0 + 16.0 + 4.0 / 60.0;
        assert!((LeadTimeMode::Elapsed.minutes(gap) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_sub_day_minutes_drop_whole_days() {
        let gap = delta("2015-02-22T22:41:00.000Z", "2015-02-25T08:57:04.000Z");

        let expected = 10.0 * 60.0 + 16.0 + 4.0 / 60.0;
        assert!((LeadTimeMode::SubDay.minutes(gap) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_sub_day_ignores_milliseconds() {
        let gap = delta("2015-02-22T10:00:00.000Z", "2015-02-22T10:01:00.999Z");

        assert!((LeadTimeMode::SubDay.minutes(gap) - 1.0).abs() < 1e-9);
        assert!((LeadTimeMode::Elapsed.minutes(gap) - 60.999 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_gap() {
        let gap = delta("2015-02-22T10:30:00.000Z", "2015-02-22T10:00:00.000Z");

        assert!((LeadTimeMode::Elapsed.minutes(gap) + 30.0).abs() < 1e-9);
        // Wraps around into the previous day
        assert!((LeadTimeMode::SubDay.minutes(gap) - (1440.0 - 30.0)).abs() < 1e-9);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();

        assert_eq!(config.intermediate_env, "Integration");
        assert_eq!(config.terminal_env, "Live");
        assert_eq!(config.success_state, "Success");
        assert_eq!(config.lead_time_mode, LeadTimeMode::Elapsed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_same_environments_rejected() {
        let config = AnalysisConfig {
            terminal_env: "Integration".to_string(),
            ..AnalysisConfig::default()
        };

        assert!(matches!(config.validate(), Err(DeployLensError::Config(_))));
    }

    #[test]
    fn test_empty_success_state_rejected() {
        let config = AnalysisConfig {
            success_state: String::new(),
            ..AnalysisConfig::default()
        };

        assert!(config.validate().is_err());
    }
}
