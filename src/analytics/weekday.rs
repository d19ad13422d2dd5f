use chrono::{Datelike, Weekday};

use crate::dataset::Project;
use crate::reports::WeekdayCount;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Counts every deployment to `environment` by the UTC weekday it was created on,
/// whatever its state. Always returns Monday through Sunday.
pub fn deployment_frequency(projects: &[Project], environment: &str) -> Vec<WeekdayCount> {
    let mut counts = [0_usize; 7];

    projects
        .iter()
        .flat_map(|p| p.releases.iter())
        .flat_map(|r| r.deployments.iter())
        .filter(|d| d.environment == environment)
        .for_each(|d| counts[d.created.weekday().num_days_from_monday() as usize] += 1);

    WEEK.iter()
        .zip(counts)
        .map(|(&day, deployments)| WeekdayCount {
            day: weekday_name(day).to_string(),
            deployments,
        })
        .collect()
}
