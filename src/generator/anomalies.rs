//! Hand-authored anomaly scenarios
//!
//! Appends four fixed suspicious patterns to an already-generated benign
//! sequence, tags every record with its anomaly flag, and shuffles the
//! combined result once so output order carries no generation information.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{AuthEvent, AuthResult, TimeWindow};
use crate::sampling::{ip_from_cidr, uniform_choice, SamplingError};

/// Rows appended per run: impossible travel (2 users x 2 events),
/// brute force (12 failures + 1 success), off-hours (1), rare source (1).
pub const INJECTED_EVENT_COUNT: usize = 19;

/// Brute-force victim account
const BRUTE_FORCE_VICTIM: &str = "carol";

/// Usernames sprayed alongside the victim to simulate credential stuffing;
/// "unknown_user" is deliberately absent from the profile table.
const BRUTE_FORCE_DECOYS: &[&str] = &["alice", "bob", "dave", "unknown_user"];

/// Source countries typical of commodity brute-force traffic
const BRUTE_FORCE_COUNTRIES: &[&str] = &["DE", "FR", "RU", "CN"];

/// Append the fixed anomaly scenarios, tag every record, and return the
/// combined sequence shuffled with the shared rng.
pub fn inject_anomalies(
    rng: &mut impl Rng,
    mut events: Vec<AuthEvent>,
    window: &TimeWindow,
) -> Result<Vec<AuthEvent>, SamplingError> {
    let mut anomalies = Vec::with_capacity(INJECTED_EVENT_COUNT);

    impossible_travel(rng, window, &mut anomalies)?;
    brute_force_then_success(rng, window, &mut anomalies)?;
    off_hours_admin(rng, window, &mut anomalies)?;
    rare_service_source(rng, window, &mut anomalies)?;

    debug_assert_eq!(anomalies.len(), INJECTED_EVENT_COUNT);

    for event in &mut events {
        event.is_injected_anomaly = false;
    }
    events.append(&mut anomalies);
    events.shuffle(rng);
    Ok(events)
}

/// Same user authenticates from the US and then from Japan within minutes.
fn impossible_travel(
    rng: &mut impl Rng,
    window: &TimeWindow,
    out: &mut Vec<AuthEvent>,
) -> Result<(), SamplingError> {
    for user in ["alice", "bob"] {
        let t1 = window.start + Duration::hours(rng.gen_range(10..=40));
        let t2 = t1 + Duration::minutes(rng.gen_range(5..=35));

        out.push(injected_event(
            t1,
            user,
            "vpn-gateway",
            "password",
            ip_from_cidr(rng, "203.0.113.0/24")?,
            "US",
            AuthResult::Success,
            "",
        ));
        out.push(injected_event(
            t2,
            user,
            "vpn-gateway",
            "password",
            ip_from_cidr(rng, "198.51.100.0/24")?,
            "JP",
            AuthResult::Success,
            "",
        ));
    }
    Ok(())
}

/// Twelve failed password attempts from one address at one-minute intervals,
/// then a success against the victim thirteen minutes after the base instant.
fn brute_force_then_success(
    rng: &mut impl Rng,
    window: &TimeWindow,
    out: &mut Vec<AuthEvent>,
) -> Result<(), SamplingError> {
    let base = window.start + Duration::hours(rng.gen_range(60..=90));
    let brute_ip = ip_from_cidr(rng, "45.33.0.0/16")?;

    for i in 0..12 {
        let username = if rng.gen::<f64>() < 0.7 {
            BRUTE_FORCE_VICTIM
        } else {
            *uniform_choice(rng, BRUTE_FORCE_DECOYS)
        };
        out.push(injected_event(
            base + Duration::minutes(i),
            username,
            "linux-sshd",
            "password",
            brute_ip.clone(),
            *uniform_choice(rng, BRUTE_FORCE_COUNTRIES),
            AuthResult::Failure,
            "bad_password",
        ));
    }

    out.push(injected_event(
        base + Duration::minutes(13),
        BRUTE_FORCE_VICTIM,
        "linux-sshd",
        "password",
        brute_ip,
        *uniform_choice(rng, BRUTE_FORCE_COUNTRIES),
        AuthResult::Success,
        "",
    ));
    Ok(())
}

/// Interactive admin-style login at roughly 3 AM, far outside dave's usual
/// hours and home country.
fn off_hours_admin(
    rng: &mut impl Rng,
    window: &TimeWindow,
    out: &mut Vec<AuthEvent>,
) -> Result<(), SamplingError> {
    let t = window.start
        + Duration::days(2)
        + Duration::hours(3)
        + Duration::minutes(rng.gen_range(0..=59));
    out.push(injected_event(
        t,
        "dave",
        "windows-ad",
        "mfa_push",
        ip_from_cidr(rng, "198.18.0.0/15")?,
        "AU",
        AuthResult::Success,
        "",
    ));
    Ok(())
}

/// The backup service account appears from a block outside its known ranges.
fn rare_service_source(
    rng: &mut impl Rng,
    window: &TimeWindow,
    out: &mut Vec<AuthEvent>,
) -> Result<(), SamplingError> {
    let t = window.start
        + Duration::days(1)
        + Duration::hours(12)
        + Duration::minutes(rng.gen_range(0..=59));
    out.push(injected_event(
        t,
        "svc_backup",
        "linux-sshd",
        "ssh_key",
        ip_from_cidr(rng, "172.31.0.0/16")?,
        "US",
        AuthResult::Success,
        "",
    ));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn injected_event(
    timestamp_utc: DateTime<Utc>,
    username: &str,
    event_source: &str,
    auth_type: &str,
    source_ip: String,
    country: &str,
    result: AuthResult,
    failure_reason: &str,
) -> AuthEvent {
    AuthEvent {
        timestamp_utc,
        username: username.to_string(),
        event_source: event_source.to_string(),
        auth_type: auth_type.to_string(),
        source_ip,
        country: country.to_string(),
        result,
        failure_reason: failure_reason.to_string(),
        is_injected_anomaly: true,
    }
}
