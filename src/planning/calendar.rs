// ABOUTME: Calendar resolution for a plan block: dates, weekdays, and workout versus rest days
// ABOUTME: Uses preferred weekdays, else a frequency pattern, with optional first-week substitutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::models::Profile;

/// Default weekdays for a weekly frequency (clamped to 1..=7)
#[must_use]
pub fn default_workout_days(frequency: u8) -> Vec<Weekday> {
    use Weekday::{Fri, Mon, Sat, Sun, Thu, Tue, Wed};
    match frequency.clamp(1, 7) {
        1 => vec![Mon],
        2 => vec![Mon, Thu],
        3 => vec![Mon, Wed, Fri],
        4 => vec![Mon, Tue, Thu, Fri],
        5 => vec![Mon, Tue, Wed, Thu, Fri],
        6 => vec![Mon, Tue, Wed, Thu, Fri, Sat],
        _ => vec![Mon, Tue, Wed, Thu, Fri, Sat, Sun],
    }
}

/// Unique weekdays ordered Monday first
fn normalize(days: &[Weekday]) -> Vec<Weekday> {
    let mut days = days.to_vec();
    days.sort_by_key(Weekday::num_days_from_monday);
    days.dedup();
    days
}

/// Regular workout weekdays for a profile
#[must_use]
pub fn resolve_workout_days(profile: &Profile) -> Vec<Weekday> {
    match profile.preferred_workout_days.as_deref() {
        Some(days) if !days.is_empty() => normalize(days),
        _ => default_workout_days(profile.workout_frequency),
    }
}

/// One calendar slot of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    /// 1-based
    pub day_number: u32,
    /// Calendar date
    pub date: NaiveDate,
    /// Weekday of `date`
    pub weekday: Weekday,
    /// Scheduled for training
    pub is_workout_day: bool,
}

/// Workout schedule for one block
#[derive(Debug, Clone)]
pub struct PlanCalendar {
    start_date: NaiveDate,
    workout_days: Vec<Weekday>,
    first_week_days: Option<Vec<Weekday>>,
}

impl PlanCalendar {
    /// Schedule starting at `start_date`
    #[must_use]
    pub fn new(
        start_date: NaiveDate,
        workout_days: Vec<Weekday>,
        first_week_days: Option<&[Weekday]>,
    ) -> Self {
        Self {
            start_date,
            workout_days,
            first_week_days: first_week_days.map(normalize),
        }
    }

    /// Regular workout weekdays
    #[must_use]
    pub fn workout_days(&self) -> &[Weekday] {
        &self.workout_days
    }

    /// Whether `weekday` on `day_number` is a workout day
    #[must_use]
    pub fn is_workout_day(&self, day_number: u32, weekday: Weekday) -> bool {
        match &self.first_week_days {
            Some(days) if day_number <= 7 => days.contains(&weekday),
            _ => self.workout_days.contains(&weekday),
        }
    }

    /// Every day of a block of `length` days
    #[must_use]
    pub fn days(&self, length: usize) -> Vec<CalendarDay> {
        (0..length)
            .filter_map(|offset| {
                let date = self.start_date.checked_add_days(Days::new(offset as u64))?;
                let day_number = u32::try_from(offset + 1).ok()?;
                let weekday = date.weekday();
                Some(CalendarDay {
                    day_number,
                    date,
                    weekday,
                    is_workout_day: self.is_workout_day(day_number, weekday),
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::Goal;

    #[test]
    fn test_preferred_days_override_frequency() {
        let mut profile = Profile::new(Goal::Strength);
        profile.workout_frequency = 5;
        profile.preferred_workout_days = Some(vec![Weekday::Sat, Weekday::Tue, Weekday::Sat]);
        assert_eq!(resolve_workout_days(&profile), vec![Weekday::Tue, Weekday::Sat]);

        profile.preferred_workout_days = Some(Vec::new());
        assert_eq!(resolve_workout_days(&profile).len(), 5);
    }

    #[test]
    fn test_first_week_substitutes_only_affect_week_one() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let calendar = PlanCalendar::new(
            start,
            default_workout_days(3),
            Some(&[Weekday::Tue, Weekday::Thu]),
        );
        let days = calendar.days(14);
        assert!(!days[0].is_workout_day);
        assert!(days[1].is_workout_day);
        assert!(days[7].is_workout_day);
        assert!(!days[8].is_workout_day);
    }
}
