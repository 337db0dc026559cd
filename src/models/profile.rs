//! Built-in synthetic user population
//!
//! A small fixed table of identities with behavioral parameters. The table is
//! constructed once in the entry point and passed by reference to the
//! generators; it is never mutated after construction.

/// Behavioral profile for one synthetic identity
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub username: String,
    /// ISO-like country code the user normally authenticates from
    pub home_country: String,
    /// Inclusive hour-of-day range of typical activity; `None` means the
    /// identity is active around the clock (service accounts)
    pub usual_hours: Option<(u32, u32)>,
    /// Probability in [0, 1] that an attempt succeeds
    pub success_rate: f64,
    /// Non-empty list of CIDR blocks the user's traffic originates from
    pub known_ip_blocks: Vec<String>,
}

impl UserProfile {
    pub fn new(
        username: &str,
        home_country: &str,
        usual_hours: Option<(u32, u32)>,
        success_rate: f64,
        known_ip_blocks: &[&str],
    ) -> Self {
        UserProfile {
            username: username.to_string(),
            home_country: home_country.to_string(),
            usual_hours,
            success_rate,
            known_ip_blocks: known_ip_blocks.iter().map(|b| b.to_string()).collect(),
        }
    }
}

/// Build the fixed user population: four interactive users plus one
/// always-on service account.
pub fn builtin_profiles() -> Vec<UserProfile> {
    vec![
        UserProfile::new("alice", "US", Some((8, 17)), 0.97, &["10.10.10.0/24", "192.168.10.0/24"]),
        UserProfile::new("bob", "US", Some((7, 16)), 0.96, &["10.10.20.0/24", "192.168.20.0/24"]),
        UserProfile::new("carol", "CA", Some((9, 18)), 0.98, &["10.10.30.0/24", "192.168.30.0/24"]),
        UserProfile::new("dave", "GB", Some((6, 15)), 0.95, &["10.10.40.0/24", "192.168.40.0/24"]),
        UserProfile::new("svc_backup", "US", None, 0.995, &["10.99.0.0/24"]),
    ]
}
