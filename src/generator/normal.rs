//! Benign event synthesis
//!
//! Draws N events by picking a user uniformly from the profile table and then
//! sampling every attribute conditioned on that user's behavioral parameters.

use rand::Rng;

use crate::models::{AuthEvent, AuthResult, TimeWindow, UserProfile};
use crate::sampling::{
    ip_from_cidr, timestamp_in_window, uniform_choice, weighted_choice, SamplingError,
};

/// Fixed global attribute distributions
pub const EVENT_SOURCES: &[(&str, f64)] = &[
    ("linux-sshd", 0.45),
    ("windows-ad", 0.35),
    ("vpn-gateway", 0.20),
];

pub const AUTH_TYPES: &[(&str, f64)] = &[
    ("password", 0.75),
    ("ssh_key", 0.18),
    ("mfa_push", 0.07),
];

/// Drawn per event for realistic attribute mixing but never written to the
/// output record.
const USER_AGENTS: &[(&str, f64)] = &[
    ("OpenSSH_8.9", 0.35),
    ("Windows10", 0.30),
    ("macOS", 0.15),
    ("curl/7.81", 0.05),
    ("unknown", 0.15),
];

/// Alternate country pool used for the 8% of events that do not report the
/// user's home country
const ALTERNATE_COUNTRIES: &[&str] = &["US", "CA", "GB", "DE", "FR", "AU", "JP"];

pub const FAILURE_REASONS: &[&str] = &[
    "bad_password",
    "mfa_denied",
    "user_not_found",
    "expired_password",
];

/// Probability that an event reports the user's home country
const HOME_COUNTRY_RATE: f64 = 0.92;

/// Generate exactly `n` benign events inside the window.
pub fn generate_normal_events(
    rng: &mut impl Rng,
    users: &[UserProfile],
    window: &TimeWindow,
    n: usize,
) -> Result<Vec<AuthEvent>, SamplingError> {
    assert!(!users.is_empty(), "profile table must not be empty");

    let mut events = Vec::with_capacity(n);
    for _ in 0..n {
        let user = uniform_choice(rng, users);

        let timestamp_utc = timestamp_in_window(rng, window, user.usual_hours)?;
        let event_source = *weighted_choice(rng, EVENT_SOURCES);
        let auth_type = *weighted_choice(rng, AUTH_TYPES);
        let _user_agent = *weighted_choice(rng, USER_AGENTS);

        let block = uniform_choice(rng, &user.known_ip_blocks);
        let source_ip = ip_from_cidr(rng, block)?;

        let country = if rng.gen::<f64>() < HOME_COUNTRY_RATE {
            user.home_country.clone()
        } else {
            uniform_choice(rng, ALTERNATE_COUNTRIES).to_string()
        };

        let success = rng.gen::<f64>() < user.success_rate;
        let failure_reason = if success {
            String::new()
        } else {
            uniform_choice(rng, FAILURE_REASONS).to_string()
        };

        events.push(AuthEvent {
            timestamp_utc,
            username: user.username.clone(),
            event_source: event_source.to_string(),
            auth_type: auth_type.to_string(),
            source_ip,
            country,
            result: if success {
                AuthResult::Success
            } else {
                AuthResult::Failure
            },
            failure_reason,
            is_injected_anomaly: false,
        });
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::builtin_profiles;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn window() -> TimeWindow {
        let end = Utc.with_ymd_and_hms(2024, 3, 8, 12, 0, 0).unwrap();
        TimeWindow::days_ending_at(end, 7)
    }

    #[test]
    fn test_exact_count_and_window() {
        let mut rng = StdRng::seed_from_u64(1337);
        let profiles = builtin_profiles();
        let events = generate_normal_events(&mut rng, &profiles, &window(), 500).unwrap();

        assert_eq!(events.len(), 500);
        for event in &events {
            assert!(window().contains(event.timestamp_utc), "{:?}", event);
            assert!(!event.is_injected_anomaly);
        }
    }

    #[test]
    fn test_usernames_come_from_profile_table() {
        let mut rng = StdRng::seed_from_u64(2);
        let profiles = builtin_profiles();
        let known: HashSet<&str> = profiles.iter().map(|p| p.username.as_str()).collect();

        let events = generate_normal_events(&mut rng, &profiles, &window(), 300).unwrap();
        for event in &events {
            assert!(known.contains(event.username.as_str()), "{}", event.username);
        }
    }

    #[test]
    fn test_failure_reason_iff_failure() {
        let mut rng = StdRng::seed_from_u64(3);
        let profiles = builtin_profiles();
        let events = generate_normal_events(&mut rng, &profiles, &window(), 2000).unwrap();

        let mut failures = 0usize;
        for event in &events {
            match event.result {
                AuthResult::Success => assert!(event.failure_reason.is_empty()),
                AuthResult::Failure => {
                    assert!(FAILURE_REASONS.contains(&event.failure_reason.as_str()));
                    failures += 1;
                }
            }
        }
        // Profile success rates sit between 0.95 and 0.995, so a 2000-row run
        // sees some failures without being dominated by them.
        assert!(failures > 0 && failures < 400, "failures = {}", failures);
    }

    #[test]
    fn test_source_ips_are_valid_literals() {
        let mut rng = StdRng::seed_from_u64(4);
        let profiles = builtin_profiles();
        let events = generate_normal_events(&mut rng, &profiles, &window(), 300).unwrap();
        for event in &events {
            assert!(
                event.source_ip.parse::<std::net::IpAddr>().is_ok(),
                "bad IP literal {}",
                event.source_ip
            );
        }
    }

    #[test]
    fn test_attribute_values_come_from_fixed_tables() {
        let mut rng = StdRng::seed_from_u64(5);
        let profiles = builtin_profiles();
        let sources: HashSet<&str> = EVENT_SOURCES.iter().map(|(s, _)| *s).collect();
        let auths: HashSet<&str> = AUTH_TYPES.iter().map(|(s, _)| *s).collect();

        let events = generate_normal_events(&mut rng, &profiles, &window(), 300).unwrap();
        for event in &events {
            assert!(sources.contains(event.event_source.as_str()));
            assert!(auths.contains(event.auth_type.as_str()));
        }
    }

    #[test]
    fn test_zero_rows() {
        let mut rng = StdRng::seed_from_u64(6);
        let profiles = builtin_profiles();
        let events = generate_normal_events(&mut rng, &profiles, &window(), 0).unwrap();
        assert!(events.is_empty());
    }
}
