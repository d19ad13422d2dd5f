use clap::ValueEnum;
use log::info;
use serde::Serialize;
use std::path::Path;

use crate::error::Result;
use crate::reports::ReleaseReports;

pub const DEPLOYMENT_FREQUENCY_FILE: &str = "1_deployment_frequency.csv";
pub const SLOW_RELEASES_FILE: &str = "2_slow_releases.csv";
pub const FAILING_RELEASES_FILE: &str = "3_failing_releases.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Three CSV tables written into a directory
    #[default]
    Csv,
    /// A single JSON document
    Json,
}

/// Writes the three report tables into `dir`, creating it when missing.
pub fn write_csv_reports(reports: &ReleaseReports, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    write_table(
        &dir.join(DEPLOYMENT_FREQUENCY_FILE),
        ["DaysOfWeek", "LiveDeployments"],
        reports
            .deployment_frequency
            .iter()
            .map(|row| (row.day.as_str(), row.deployments)),
    )?;

    write_table(
        &dir.join(SLOW_RELEASES_FILE),
        ["ProjectGroup", "AverageTimeToLive"],
        reports
            .lead_times
            .iter()
            .map(|row| (row.project_group.as_deref(), row.average_minutes)),
    )?;

    write_table(
        &dir.join(FAILING_RELEASES_FILE),
        ["ProjectGroup", "FailedReleases"],
        reports
            .stalled_releases
            .iter()
            .map(|row| (row.project_group.as_deref(), row.failed_releases)),
    )?;

    info!("Reports written to: {}", dir.display());
    Ok(())
}

fn write_table<R, I>(path: &Path, headers: [&str; 2], rows: I) -> Result<()>
where
    R: Serialize,
    I: IntoIterator<Item = R>,
{
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(headers)?;

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn render_json(reports: &ReleaseReports, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(reports)?
    } else {
        serde_json::to_string(reports)?
    };
    Ok(json)
}

/// Writes the JSON document to `output`, or stdout when no path is given.
pub fn write_json_report(
    reports: &ReleaseReports,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let json_output = render_json(reports, pretty)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json_output)?;
        info!("Report written to: {}", output_path.display());
    } else {
        println!("{json_output}");
    }

    Ok(())
}
