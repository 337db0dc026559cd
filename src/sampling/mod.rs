//! Deterministic sampling primitives
//!
//! All functions take an explicit `Rng` handle so a seeded `StdRng` threaded
//! through the whole run yields reproducible output. Nothing here touches
//! global random state.

pub mod ip;
pub mod time;
pub mod weighted;

pub use ip::ip_from_cidr;
pub use time::timestamp_in_window;
pub use weighted::{uniform_choice, weighted_choice};

use thiserror::Error;

/// Errors from the sampling primitives
#[derive(Error, Debug)]
pub enum SamplingError {
    #[error("invalid network '{cidr}': {reason}")]
    InvalidNetwork { cidr: String, reason: String },

    #[error("time window must end after it starts")]
    EmptyWindow,
}
