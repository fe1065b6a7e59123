use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use crate::domain::models::rate::Rate;
use crate::domain::models::schedule::{ScheduleDay, ScheduleWithRates};
use crate::domain::services::availability::{day_of_week, find_matching_schedule, TimeRange};

/// The pricing result handed back to the booking flow. Plain pass-through of
/// the selected rate; the resolver does no arithmetic of its own.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ResolvedPrice {
    pub price: f64,
    pub reservation_amount: f64,
    pub rate_name: String,
    pub schedule: String,
    pub day_of_week: i32,
}

/// Selects one rate from a schedule's attached list. Policy: first in
/// persisted order, unconditionally. Rates beyond the first are never
/// consulted (known limitation, preserved on purpose).
pub fn pick_rate(rates: &[Rate]) -> Option<&Rate> {
    rates.first()
}

/// Resolves a (date, "HH:MM - HH:MM") request to a price and deposit.
///
/// Composes window matching and rate selection. All failure conditions are
/// non-exceptional: a malformed range string, no containing window, or a
/// matched window with no rates each yield `None` with a logged warning. The
/// weekly open/closed check (`is_day_open`) is the caller's responsibility.
pub fn resolve_price(
    date: NaiveDate,
    requested_range: &str,
    schedules: &[ScheduleWithRates],
    schedule_days: &[ScheduleDay],
) -> Option<ResolvedPrice> {
    let Some(requested) = TimeRange::parse(requested_range) else {
        warn!("Rejecting pricing request with malformed range {:?}", requested_range);
        return None;
    };

    let Some(matched) = find_matching_schedule(schedules, schedule_days, date, &requested) else {
        warn!(%date, "No schedule window contains requested range {}", requested_range);
        return None;
    };

    let Some(rate) = pick_rate(&matched.rates) else {
        warn!(schedule_id = %matched.schedule.id, "Matched schedule has no rates attached");
        return None;
    };

    Some(ResolvedPrice {
        price: rate.price,
        reservation_amount: rate.reservation_amount,
        rate_name: rate.name.clone(),
        schedule: matched.schedule.window(),
        day_of_week: day_of_week(date),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::schedule::Schedule;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()
    }

    fn active_monday(complex_id: &str) -> ScheduleDay {
        let mut d = ScheduleDay::new(complex_id.to_string(), 1);
        d.is_active = true;
        d
    }

    fn window_with_rates(day: &ScheduleDay, start: &str, end: &str, rates: Vec<Rate>) -> ScheduleWithRates {
        ScheduleWithRates {
            schedule: Schedule::new(
                day.complex_id.clone(),
                day.id.clone(),
                start.to_string(),
                end.to_string(),
                "FUTBOL_5".to_string(),
                None,
            ),
            rates,
        }
    }

    #[test]
    fn test_resolves_contained_range() {
        let mon = active_monday("c1");
        let rate = Rate::new(Some("c1".to_string()), "Nocturno".to_string(), 5000.0, 2000.0);
        let schedules = vec![window_with_rates(&mon, "18:00", "20:00", vec![rate])];
        let days = vec![mon];

        let resolved = resolve_price(monday(), "18:00 - 19:00", &schedules, &days).unwrap();
        assert_eq!(resolved.price, 5000.0);
        assert_eq!(resolved.reservation_amount, 2000.0);
        assert_eq!(resolved.rate_name, "Nocturno");
        assert_eq!(resolved.schedule, "18:00 - 20:00");
        assert_eq!(resolved.day_of_week, 1);
    }

    #[test]
    fn test_first_rate_wins() {
        let mon = active_monday("c1");
        let first = Rate::new(Some("c1".to_string()), "Diurno".to_string(), 4000.0, 1500.0);
        let second = Rate::new(Some("c1".to_string()), "Nocturno".to_string(), 6000.0, 2500.0);
        let schedules = vec![window_with_rates(&mon, "18:00", "20:00", vec![first, second])];
        let days = vec![mon];

        let resolved = resolve_price(monday(), "18:00 - 19:00", &schedules, &days).unwrap();
        assert_eq!(resolved.rate_name, "Diurno");
        assert_eq!(resolved.price, 4000.0);
    }

    #[test]
    fn test_malformed_range_is_unpriceable() {
        let mon = active_monday("c1");
        let rate = Rate::new(Some("c1".to_string()), "Base".to_string(), 5000.0, 2000.0);
        let schedules = vec![window_with_rates(&mon, "18:00", "20:00", vec![rate])];
        let days = vec![mon];

        assert!(resolve_price(monday(), "18:00/19:00", &schedules, &days).is_none());
        assert!(resolve_price(monday(), "", &schedules, &days).is_none());
    }

    #[test]
    fn test_window_without_rates_is_unpriceable() {
        let mon = active_monday("c1");
        let schedules = vec![window_with_rates(&mon, "18:00", "20:00", Vec::new())];
        let days = vec![mon];

        assert!(resolve_price(monday(), "18:00 - 19:00", &schedules, &days).is_none());
    }

    #[test]
    fn test_no_window_on_other_weekday() {
        let mon = active_monday("c1");
        let rate = Rate::new(Some("c1".to_string()), "Base".to_string(), 5000.0, 2000.0);
        let schedules = vec![window_with_rates(&mon, "18:00", "20:00", vec![rate])];
        let days = vec![mon];

        let tuesday = monday().succ_opt().unwrap();
        assert!(resolve_price(tuesday, "18:00 - 19:00", &schedules, &days).is_none());
    }
}
