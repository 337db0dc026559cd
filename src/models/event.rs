use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Outcome of an authentication attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthResult {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILURE")]
    Failure,
}

impl AuthResult {
    pub fn is_success(self) -> bool {
        matches!(self, AuthResult::Success)
    }
}

/// A single synthetic authentication log record.
///
/// Field order matches the output column order exactly; the CSV writer relies
/// on serde emitting fields in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthEvent {
    /// UTC instant at second precision
    #[serde(serialize_with = "serialize_second_precision")]
    pub timestamp_utc: DateTime<Utc>,
    /// References a profile username, or an ad-hoc value such as
    /// "unknown_user" emitted by the brute-force scenario
    pub username: String,
    pub event_source: String,
    pub auth_type: String,
    pub source_ip: String,
    pub country: String,
    pub result: AuthResult,
    /// Empty exactly when result is SUCCESS
    pub failure_reason: String,
    pub is_injected_anomaly: bool,
}

fn serialize_second_precision<S: Serializer>(
    ts: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_serializes_at_second_precision() {
        let event = AuthEvent {
            timestamp_utc: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 5).unwrap(),
            username: "alice".to_string(),
            event_source: "linux-sshd".to_string(),
            auth_type: "password".to_string(),
            source_ip: "10.10.10.5".to_string(),
            country: "US".to_string(),
            result: AuthResult::Success,
            failure_reason: String::new(),
            is_injected_anomaly: false,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["timestamp_utc"], "2024-03-01T09:30:05Z");
        assert_eq!(json["result"], "SUCCESS");
        assert_eq!(json["is_injected_anomaly"], false);
    }

    #[test]
    fn test_result_rename() {
        assert_eq!(
            serde_json::to_string(&AuthResult::Failure).unwrap(),
            "\"FAILURE\""
        );
        assert!(AuthResult::Success.is_success());
        assert!(!AuthResult::Failure.is_success());
    }
}
