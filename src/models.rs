use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque habit identifier. New habits get a UUID v4; stored ids of any shape are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(String);

impl HabitId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for HabitId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for HabitId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Display for HabitId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The persisted record. Field names follow the stored JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    pub completed_dates: BTreeSet<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Habit {
    pub fn new(id: HabitId, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            completed_dates: BTreeSet::new(),
            created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HabitView {
    pub id: HabitId,
    pub name: String,
    pub completed_today: bool,
    pub streak: u32,
    pub last_7_days: Vec<DayCell>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub today_completion_rate: u32,
    pub active_habits: usize,
    pub total_completions: usize,
    pub longest_streak: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub today: NaiveDate,
    pub stats: StatsSummary,
    pub habits: Vec<HabitView>,
    pub quote: Quote,
}

#[derive(Debug, Deserialize)]
pub struct AddHabitRequest {
    pub name: String,
}
