mod config;
mod engine;
mod grouping;
mod lead_time;
mod stalled;
mod success_index;
mod weekday;

#[cfg(test)]
mod test_support;

pub use config::{
    AnalysisConfig, LeadTimeMode, DEFAULT_INTERMEDIATE_ENV, DEFAULT_SUCCESS_STATE,
    DEFAULT_TERMINAL_ENV,
};
pub use engine::ReleaseAnalyzer;
