pub mod anomalies;
pub mod normal;

pub use anomalies::{inject_anomalies, INJECTED_EVENT_COUNT};
pub use normal::generate_normal_events;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GeneratorConfig;
use crate::models::{builtin_profiles, AuthEvent, TimeWindow};
use crate::sampling::SamplingError;

/// Run the full pipeline: build the profile table, generate the benign rows,
/// inject the anomaly scenarios, and return the shuffled combined dataset.
///
/// The window end is a parameter rather than a clock read, so two calls with
/// the same config and the same `end` produce identical output.
pub fn generate_dataset(
    config: &GeneratorConfig,
    end: DateTime<Utc>,
) -> Result<Vec<AuthEvent>, SamplingError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let window = TimeWindow::days_ending_at(end, config.days);
    let profiles = builtin_profiles();

    let normal = generate_normal_events(&mut rng, &profiles, &window, config.rows)?;
    log::info!("generated {} normal events", normal.len());

    let combined = inject_anomalies(&mut rng, normal, &window)?;
    log::info!(
        "injected {} anomaly events, {} rows total",
        INJECTED_EVENT_COUNT,
        combined.len()
    );
    Ok(combined)
}
