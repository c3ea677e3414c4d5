use crate::date::{day_of_week, format_local_date, local_today};
use crate::models::{Frequency, Habit};
use chrono::{Duration, NaiveDate};
use serde::Serialize;

pub const MAX_LOOKBACK_DAYS: u32 = 365;
pub const STATS_WINDOW_DAYS: u32 = 30;

// Upper bound on the backward scan in recent_scheduled_dates. Guarantees
// termination even if an effective schedule were somehow empty.
const RECENT_SCAN_CAP: u32 = 366;

const ALL_DAYS: [u8; 7] = [0, 1, 2, 3, 4, 5, 6];
const WEEKDAYS: [u8; 5] = [1, 2, 3, 4, 5];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CompletionStats {
    pub completed: u32,
    pub scheduled: u32,
}

impl CompletionStats {
    /// Completion percentage, 0.0 when nothing was scheduled.
    pub fn rate(&self) -> f64 {
        if self.scheduled == 0 {
            return 0.0;
        }
        f64::from(self.completed) / f64::from(self.scheduled) * 100.0
    }
}

/// The effective day-of-week set for a habit. `weekdays` ignores any stored
/// `days_of_week`; `daily` and `custom` fall back to every day when the
/// stored set is empty, so the schedule is never empty in effect.
pub fn scheduled_days(habit: &Habit) -> Vec<u8> {
    match habit.frequency {
        Frequency::Weekdays => WEEKDAYS.to_vec(),
        Frequency::Daily | Frequency::Custom => {
            if habit.days_of_week.is_empty() {
                ALL_DAYS.to_vec()
            } else {
                habit.days_of_week.clone()
            }
        }
    }
}

/// The single definition of "scheduled" used by the streak engine, journal,
/// calendar, and check-in display alike.
pub fn is_scheduled_date(habit: &Habit, date: NaiveDate) -> bool {
    scheduled_days(habit).contains(&day_of_week(date))
}

fn completed_on(habit: &Habit, date: NaiveDate) -> bool {
    habit
        .entries
        .get(&format_local_date(date))
        .is_some_and(|entry| entry.completed)
}

pub fn current_streak(habit: &Habit) -> u32 {
    current_streak_at(local_today(), habit)
}

/// Consecutive completed scheduled days ending at `today`. Unscheduled days
/// are transparent: they neither break nor extend the streak. An entry with
/// `completed: false` counts the same as no entry.
pub fn current_streak_at(today: NaiveDate, habit: &Habit) -> u32 {
    let mut streak = 0;
    for offset in 0..MAX_LOOKBACK_DAYS {
        let date = today - Duration::days(i64::from(offset));
        if !is_scheduled_date(habit, date) {
            continue;
        }
        if completed_on(habit, date) {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

pub fn longest_streak(habit: &Habit) -> u32 {
    longest_streak_at(local_today(), habit)
}

/// Longest run of completed scheduled days within the lookback window. A
/// scheduled miss resets the running count instead of ending the scan.
pub fn longest_streak_at(today: NaiveDate, habit: &Habit) -> u32 {
    let mut longest = 0;
    let mut current = 0;
    for offset in 0..MAX_LOOKBACK_DAYS {
        let date = today - Duration::days(i64::from(offset));
        if !is_scheduled_date(habit, date) {
            continue;
        }
        if completed_on(habit, date) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

pub fn completion_stats(habit: &Habit, window_days: u32) -> CompletionStats {
    completion_stats_at(local_today(), habit, window_days)
}

/// Scheduled and completed counts over the trailing `window_days` calendar
/// days ending at `today`.
pub fn completion_stats_at(today: NaiveDate, habit: &Habit, window_days: u32) -> CompletionStats {
    let mut stats = CompletionStats::default();
    for offset in 0..window_days {
        let date = today - Duration::days(i64::from(offset));
        if !is_scheduled_date(habit, date) {
            continue;
        }
        stats.scheduled += 1;
        if completed_on(habit, date) {
            stats.completed += 1;
        }
    }
    stats
}

pub fn completion_rate(habit: &Habit, window_days: u32) -> f64 {
    completion_rate_at(local_today(), habit, window_days)
}

pub fn completion_rate_at(today: NaiveDate, habit: &Habit, window_days: u32) -> f64 {
    completion_stats_at(today, habit, window_days).rate()
}

pub fn recent_scheduled_dates(habit: &Habit, count: usize) -> Vec<String> {
    recent_scheduled_dates_at(local_today(), habit, count)
}

/// The `count` most recent scheduled dates at or before `start`, newest
/// first, skipping unscheduled days.
pub fn recent_scheduled_dates_at(start: NaiveDate, habit: &Habit, count: usize) -> Vec<String> {
    let mut dates = Vec::with_capacity(count);
    let mut offset = 0;
    while dates.len() < count && offset < RECENT_SCAN_CAP {
        let date = start - Duration::days(i64::from(offset));
        if is_scheduled_date(habit, date) {
            dates.push(format_local_date(date));
        }
        offset += 1;
    }
    dates
}
