use crate::models::{DayCell, Habit, HabitView, StatsSummary};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

const WINDOW_DAYS: i64 = 7;

pub fn is_completed_today(habit: &Habit, today: NaiveDate) -> bool {
    habit.completed_dates.contains(&today)
}

/// Returns a copy of `dates` with `today` flipped in or out.
pub fn toggle_today(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> BTreeSet<NaiveDate> {
    let mut toggled = dates.clone();
    if !toggled.remove(&today) {
        toggled.insert(today);
    }
    toggled
}

/// Consecutive completed days ending at `today`. A missing `today` yields 0,
/// even when the days before it form a run.
pub fn streak(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut count = 0u32;
    let mut cursor = today;
    while dates.contains(&cursor) {
        count = count.saturating_add(1);
        match cursor.pred_opt() {
            Some(previous) => cursor = previous,
            None => break,
        }
    }
    count
}

/// Seven cells, oldest (six days ago) first, today last.
pub fn last_7_days(habit: &Habit, today: NaiveDate) -> Vec<DayCell> {
    (0..WINDOW_DAYS)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            DayCell {
                date,
                completed: habit.completed_dates.contains(&date),
            }
        })
        .collect()
}

/// Percentage of habits done today, rounded half up. No habits means 0.
pub fn today_completion_rate(habits: &[Habit], today: NaiveDate) -> u32 {
    if habits.is_empty() {
        return 0;
    }

    let completed = habits
        .iter()
        .filter(|habit| is_completed_today(habit, today))
        .count() as u64;
    let total = habits.len() as u64;

    ((200 * completed + total) / (2 * total)) as u32
}

pub fn total_completions(habits: &[Habit]) -> usize {
    habits.iter().map(|habit| habit.completed_dates.len()).sum()
}

pub fn longest_streak(habits: &[Habit], today: NaiveDate) -> u32 {
    habits
        .iter()
        .map(|habit| streak(&habit.completed_dates, today))
        .max()
        .unwrap_or(0)
}

pub fn build_stats_at(today: NaiveDate, habits: &[Habit]) -> StatsSummary {
    StatsSummary {
        today_completion_rate: today_completion_rate(habits, today),
        active_habits: habits.len(),
        total_completions: total_completions(habits),
        longest_streak: longest_streak(habits, today),
    }
}

pub fn habit_view(habit: &Habit, today: NaiveDate) -> HabitView {
    HabitView {
        id: habit.id.clone(),
        name: habit.name.clone(),
        completed_today: is_completed_today(habit, today),
        streak: streak(&habit.completed_dates, today),
        last_7_days: last_7_days(habit, today),
        created_at: habit.created_at,
    }
}
