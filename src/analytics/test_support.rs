use crate::dataset::{parse_timestamp, Deployment, Project, Release};

pub fn deployment(environment: &str, state: &str, created: &str) -> Deployment {
    Deployment {
        environment: environment.to_string(),
        state: state.to_string(),
        created: parse_timestamp(created).expect("valid test timestamp"),
    }
}

pub fn release(version: &str, deployments: Vec<Deployment>) -> Release {
    Release {
        version: version.to_string(),
        deployments,
    }
}

pub fn project(group: Option<&str>, releases: Vec<Release>) -> Project {
    Project {
        project_group: group.map(str::to_string),
        releases,
    }
}
