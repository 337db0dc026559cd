pub mod config;
pub mod generator;
pub mod models;
pub mod output;
pub mod sampling;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use generator::{generate_dataset, generate_normal_events, inject_anomalies, INJECTED_EVENT_COUNT};
pub use models::{builtin_profiles, AuthEvent, AuthResult, TimeWindow, UserProfile};
pub use output::{DatasetWriter, OutputError, OutputFormat};
pub use sampling::SamplingError;
