use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::Rng;

use super::SamplingError;
use crate::models::TimeWindow;

/// Probability that a preferred-hours draw overrides the base instant's
/// time-of-day; the remainder stays uniform across all 24 hours.
const PREFER_HOURS_BIAS: f64 = 0.8;

/// Sample one instant from the window, optionally biased toward an inclusive
/// hour-of-day range.
///
/// The date is always uniform across the window. With `prefer_hours` set, the
/// hour/minute/second fields are redrawn inside the preferred range 80% of
/// the time, modeling realistic-but-imperfect business-hours behavior.
pub fn timestamp_in_window(
    rng: &mut impl Rng,
    window: &TimeWindow,
    prefer_hours: Option<(u32, u32)>,
) -> Result<DateTime<Utc>, SamplingError> {
    let total_seconds = window.total_seconds();
    if total_seconds <= 0 {
        return Err(SamplingError::EmptyWindow);
    }

    let base = window.start + Duration::seconds(rng.gen_range(0..=total_seconds));

    let (hour_start, hour_end) = match prefer_hours {
        Some(range) => range,
        None => return Ok(base),
    };

    if rng.gen::<f64>() < PREFER_HOURS_BIAS {
        let hour = rng.gen_range(hour_start..=hour_end);
        let minute = rng.gen_range(0..60);
        let second = rng.gen_range(0..60);
        if let Some(adjusted) = base.date_naive().and_hms_opt(hour, minute, second) {
            let adjusted = Utc.from_utc_datetime(&adjusted);
            // The override keeps the base date; on the window's boundary
            // dates that can step outside it, in which case the uniform
            // base instant is kept instead.
            if window.contains(adjusted) {
                return Ok(adjusted);
            }
        }
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn window() -> TimeWindow {
        let end = Utc.with_ymd_and_hms(2024, 3, 8, 0, 0, 0).unwrap();
        TimeWindow::days_ending_at(end, 7)
    }

    #[test]
    fn test_unbiased_sample_stays_in_window() {
        let mut rng = StdRng::seed_from_u64(5);
        let window = window();
        for _ in 0..1000 {
            let ts = timestamp_in_window(&mut rng, &window, None).unwrap();
            assert!(window.contains(ts), "{} outside window", ts);
        }
    }

    #[test]
    fn test_preferred_hours_concentration() {
        let mut rng = StdRng::seed_from_u64(6);
        let window = window();
        let draws = 20_000;
        let mut in_range = 0usize;
        for _ in 0..draws {
            let ts = timestamp_in_window(&mut rng, &window, Some((9, 17))).unwrap();
            assert!(window.contains(ts));
            if (9..=17).contains(&ts.hour()) {
                in_range += 1;
            }
        }
        // 80% forced into [9, 17] plus the 20% uniform tail that lands there
        // by chance: 0.8 + 0.2 * 9/24 = 0.875
        let freq = in_range as f64 / draws as f64;
        assert!((freq - 0.875).abs() < 0.02, "in-range frequency {:.3}", freq);
    }

    #[test]
    fn test_always_on_range_is_uniform_over_hours() {
        let mut rng = StdRng::seed_from_u64(7);
        let window = window();
        let mut night = 0usize;
        let draws = 10_000;
        for _ in 0..draws {
            let ts = timestamp_in_window(&mut rng, &window, None).unwrap();
            if ts.hour() < 6 {
                night += 1;
            }
        }
        let freq = night as f64 / draws as f64;
        assert!((freq - 0.25).abs() < 0.03, "night frequency {:.3}", freq);
    }

    #[test]
    fn test_empty_window_is_rejected() {
        let mut rng = StdRng::seed_from_u64(8);
        let end = Utc.with_ymd_and_hms(2024, 3, 8, 0, 0, 0).unwrap();
        let empty = TimeWindow { start: end, end };
        assert!(matches!(
            timestamp_in_window(&mut rng, &empty, None),
            Err(SamplingError::EmptyWindow)
        ));
    }
}
