use chrono::{DateTime, NaiveDateTime, Utc};
use indexmap::IndexMap;
use log::info;
use serde::Deserialize;
use std::path::Path;

use crate::error::{DeployLensError, Result};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%3fZ";
const TIMESTAMP_LEN: usize = "YYYY-MM-DDTHH:MM:SS.sssZ".len();

#[derive(Debug, Deserialize)]
struct DatasetDto {
    projects: Vec<ProjectDto>,
}

#[derive(Debug, Deserialize)]
struct ProjectDto {
    #[serde(default)]
    project_group: Option<String>,
    #[serde(default)]
    releases: Vec<ReleaseDto>,
}

#[derive(Debug, Deserialize)]
struct ReleaseDto {
    version: String,
    #[serde(default)]
    deployments: Vec<DeploymentDto>,
}

#[derive(Debug, Deserialize)]
struct DeploymentDto {
    environment: String,
    state: String,
    created: String,
}

#[derive(Debug, Clone)]
pub struct Deployment {
    pub environment: String,
    pub state: String,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Release {
    pub version: String,
    pub deployments: Vec<Deployment>,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub project_group: Option<String>,
    pub releases: Vec<Release>,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub projects: Vec<Project>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading dataset from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let dto: DatasetDto = serde_json::from_str(content)?;

        let projects = dto
            .projects
            .into_iter()
            .map(transform_project)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { projects })
    }

    pub fn releases(&self) -> impl Iterator<Item = &Release> {
        self.projects.iter().flat_map(|p| p.releases.iter())
    }

    pub fn deployments(&self) -> impl Iterator<Item = &Deployment> {
        self.releases().flat_map(|r| r.deployments.iter())
    }

    /// Versions carried by more than one release, in first-seen order.
    pub fn duplicate_versions(&self) -> Vec<String> {
        let counts = self
            .releases()
            .fold(IndexMap::new(), |mut counts, release| {
                *counts.entry(release.version.as_str()).or_insert(0_usize) += 1;
                counts
            });

        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(version, _)| version.to_string())
            .collect()
    }
}

fn transform_project(dto: ProjectDto) -> Result<Project> {
    let releases = dto
        .releases
        .into_iter()
        .map(transform_release)
        .collect::<Result<Vec<_>>>()?;

    Ok(Project {
        project_group: dto.project_group,
        releases,
    })
}

fn transform_release(dto: ReleaseDto) -> Result<Release> {
    let deployments = dto
        .deployments
        .into_iter()
        .map(|d| {
            let created = parse_timestamp(&d.created).ok_or_else(|| {
                DeployLensError::InvalidTimestamp {
                    version: dto.version.clone(),
                    value: d.created.clone(),
                }
            })?;

            Ok(Deployment {
                environment: d.environment,
                state: d.state,
                created,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Release {
        version: dto.version,
        deployments,
    })
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    // chrono accepts unpadded fields, so the width is checked first
    if value.len() != TIMESTAMP_LEN {
        return None;
    }

    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .ok()
        .map(|dt| dt.and_utc())
}
