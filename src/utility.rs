use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

pub fn get_progressbar_long_jobs(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(" {msg} {wide_bar} estimated remaining: {eta_precise}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

/// Logs to stderr, filtered by `RUST_LOG` (`info` if unset).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DurationSummary {
    pub min: Duration,
    pub median: Duration,
    pub average: Duration,
    pub max: Duration,
}

pub fn summarize_durations(durations: &[Duration]) -> Option<DurationSummary> {
    let sorted = durations.iter().copied().sorted().collect_vec();
    let (&min, &max) = (sorted.first()?, sorted.last()?);
    let average = sorted.iter().sum::<Duration>() / sorted.len() as u32;

    Some(DurationSummary {
        min,
        median: sorted[sorted.len() / 2],
        average,
        max,
    })
}
