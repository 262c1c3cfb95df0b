use crate::clock::Clock;
use crate::models::{DashboardView, Habit, HabitId, Quote};
use crate::stats::{build_stats_at, habit_view, toggle_today};
use crate::storage::HabitStore;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Owns the session's habit list and writes it back after every change.
pub struct Dashboard {
    habits: Vec<Habit>,
    store: Arc<dyn HabitStore>,
    clock: Arc<dyn Clock>,
}

impl Dashboard {
    /// Loads the stored list once. Unreadable or malformed data starts an empty
    /// list; the stored copy stays untouched until the next mutation.
    pub async fn open(store: Arc<dyn HabitStore>, clock: Arc<dyn Clock>) -> Self {
        let habits = match store.load().await {
            Ok(habits) => dedup_ids(habits),
            Err(err) => {
                warn!("starting with an empty habit list: {err}");
                Vec::new()
            }
        };

        Self {
            habits,
            store,
            clock,
        }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn view(&self, quote: Quote) -> DashboardView {
        let today = self.today();
        DashboardView {
            today,
            stats: build_stats_at(today, &self.habits),
            habits: self.habits.iter().map(|habit| habit_view(habit, today)).collect(),
            quote,
        }
    }

    /// Appends a habit unless the trimmed name is empty.
    pub async fn add_habit(&mut self, name: &str) -> Option<HabitId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let mut id = HabitId::generate();
        while self.position(&id).is_some() {
            id = HabitId::generate();
        }

        self.habits.push(Habit::new(id.clone(), name, self.clock.now()));
        debug!(%id, name, "habit added");
        self.persist().await;
        Some(id)
    }

    pub async fn delete_habit(&mut self, id: &HabitId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        self.habits.remove(index);
        debug!(%id, "habit deleted");
        self.persist().await;
        true
    }

    /// Flips today's completion and returns the new state, or `None` for an unknown id.
    pub async fn toggle_habit_today(&mut self, id: &HabitId) -> Option<bool> {
        let index = self.position(id)?;
        let today = self.clock.today();

        let habit = &mut self.habits[index];
        habit.completed_dates = toggle_today(&habit.completed_dates, today);
        let completed = habit.completed_dates.contains(&today);
        debug!(%id, %today, completed, "habit toggled");

        self.persist().await;
        Some(completed)
    }

    fn position(&self, id: &HabitId) -> Option<usize> {
        self.habits.iter().position(|habit| &habit.id == id)
    }

    async fn persist(&self) {
        if let Err(err) = self.store.save(&self.habits).await {
            error!("failed to persist habits: {err}");
        }
    }
}

fn dedup_ids(habits: Vec<Habit>) -> Vec<Habit> {
    let mut seen = HashSet::new();
    habits
        .into_iter()
        .filter(|habit| {
            let fresh = seen.insert(habit.id.clone());
            if !fresh {
                warn!(id = %habit.id, "dropping habit with duplicate id");
            }
            fresh
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::errors::StorageError;
    use crate::quotes::QUOTES;
    use crate::storage::{MemoryStore, decode};
    use async_trait::async_trait;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    async fn open_with(store: Arc<MemoryStore>) -> Dashboard {
        Dashboard::open(store, Arc::new(FixedClock::on(today()))).await
    }

    fn stored(store: &MemoryStore) -> Vec<Habit> {
        decode(&store.raw().expect("slot written")).unwrap()
    }

    #[tokio::test]
    async fn exercise_scenario_end_to_end() {
        let store = Arc::new(MemoryStore::new());
        let mut dashboard = open_with(store.clone()).await;

        let id = dashboard.add_habit("Exercise").await.expect("habit added");
        let view = dashboard.view(QUOTES[0]);
        assert_eq!(view.habits.len(), 1);
        assert_eq!(view.stats.today_completion_rate, 0);
        assert_eq!(view.stats.total_completions, 0);
        assert_eq!(view.stats.longest_streak, 0);

        assert_eq!(dashboard.toggle_habit_today(&id).await, Some(true));
        let view = dashboard.view(QUOTES[0]);
        assert_eq!(view.stats.today_completion_rate, 100);
        assert_eq!(view.stats.total_completions, 1);
        assert_eq!(view.habits[0].streak, 1);

        assert_eq!(dashboard.toggle_habit_today(&id).await, Some(false));
        let view = dashboard.view(QUOTES[0]);
        assert_eq!(view.stats.today_completion_rate, 0);
        assert_eq!(view.stats.total_completions, 0);
        assert_eq!(view.habits[0].streak, 0);

        assert!(dashboard.delete_habit(&id).await);
        let view = dashboard.view(QUOTES[0]);
        assert!(view.habits.is_empty());
        assert_eq!(view.stats.active_habits, 0);
        assert_eq!(view.stats.today_completion_rate, 0);
        assert_eq!(view.stats.total_completions, 0);
        assert_eq!(view.stats.longest_streak, 0);
        assert!(stored(&store).is_empty());
    }

    #[tokio::test]
    async fn blank_names_are_ignored_without_saving() {
        let store = Arc::new(MemoryStore::new());
        let mut dashboard = open_with(store.clone()).await;

        assert_eq!(dashboard.add_habit("   ").await, None);
        assert_eq!(dashboard.add_habit("").await, None);
        assert!(dashboard.habits().is_empty());
        assert!(store.raw().is_none());
    }

    #[tokio::test]
    async fn names_are_trimmed_and_appended_in_order() {
        let store = Arc::new(MemoryStore::new());
        let mut dashboard = open_with(store.clone()).await;

        dashboard.add_habit("  Read ").await.unwrap();
        dashboard.add_habit("Meditate").await.unwrap();

        let names: Vec<&str> = dashboard.habits().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Read", "Meditate"]);
        assert_ne!(dashboard.habits()[0].id, dashboard.habits()[1].id);
        assert_eq!(dashboard.habits()[0].created_at, FixedClock::on(today()).now);
    }

    #[tokio::test]
    async fn every_mutation_is_persisted() {
        let store = Arc::new(MemoryStore::new());
        let mut dashboard = open_with(store.clone()).await;

        let read = dashboard.add_habit("Read").await.unwrap();
        let walk = dashboard.add_habit("Walk").await.unwrap();
        assert_eq!(stored(&store), dashboard.habits());

        dashboard.toggle_habit_today(&walk).await;
        assert_eq!(stored(&store), dashboard.habits());
        assert!(stored(&store)[1].completed_dates.contains(&today()));

        dashboard.delete_habit(&read).await;
        assert_eq!(stored(&store), dashboard.habits());
        assert_eq!(stored(&store).len(), 1);
    }

    #[tokio::test]
    async fn unknown_ids_are_no_ops() {
        let store = Arc::new(MemoryStore::new());
        let mut dashboard = open_with(store.clone()).await;
        dashboard.add_habit("Read").await.unwrap();
        let before = store.raw();

        let missing = HabitId::from("missing");
        assert!(!dashboard.delete_habit(&missing).await);
        assert_eq!(dashboard.toggle_habit_today(&missing).await, None);
        assert_eq!(dashboard.habits().len(), 1);
        assert_eq!(store.raw(), before);
    }

    #[tokio::test]
    async fn toggle_leaves_other_habits_alone() {
        let store = Arc::new(MemoryStore::new());
        let mut dashboard = open_with(store).await;
        let first = dashboard.add_habit("First").await.unwrap();
        dashboard.add_habit("Second").await.unwrap();

        dashboard.toggle_habit_today(&first).await;
        assert!(dashboard.habits()[0].completed_dates.contains(&today()));
        assert!(dashboard.habits()[1].completed_dates.is_empty());
    }

    #[tokio::test]
    async fn reopening_restores_the_saved_list() {
        let store = Arc::new(MemoryStore::new());
        let mut dashboard = open_with(store.clone()).await;
        let id = dashboard.add_habit("Journal").await.unwrap();
        dashboard.toggle_habit_today(&id).await;
        let saved = dashboard.habits().to_vec();

        let reopened = open_with(store).await;
        assert_eq!(reopened.habits(), saved.as_slice());
    }

    #[tokio::test]
    async fn streak_carries_over_from_previous_days() {
        let store = Arc::new(MemoryStore::new());
        let mut dashboard = open_with(store.clone()).await;
        let id = dashboard.add_habit("Run").await.unwrap();
        dashboard.toggle_habit_today(&id).await;

        let tomorrow = today() + Duration::days(1);
        let mut next_day = Dashboard::open(store, Arc::new(FixedClock::on(tomorrow))).await;
        assert_eq!(next_day.view(QUOTES[0]).habits[0].streak, 0);

        next_day.toggle_habit_today(&id).await;
        assert_eq!(next_day.view(QUOTES[0]).habits[0].streak, 2);
    }

    #[tokio::test]
    async fn malformed_store_starts_empty() {
        let store = Arc::new(MemoryStore::with_raw("{ definitely not habits"));
        let dashboard = open_with(store.clone()).await;

        assert!(dashboard.habits().is_empty());
        assert_eq!(store.raw().as_deref(), Some("{ definitely not habits"));
    }

    #[tokio::test]
    async fn duplicate_ids_keep_the_first_entry() {
        let text = r#"[
            {"id":"1","name":"A","completedDates":[],"createdAt":"2026-01-01T00:00:00Z"},
            {"id":"1","name":"B","completedDates":[],"createdAt":"2026-01-01T00:00:00Z"}
        ]"#;
        let dashboard = open_with(Arc::new(MemoryStore::with_raw(text))).await;

        assert_eq!(dashboard.habits().len(), 1);
        assert_eq!(dashboard.habits()[0].name, "A");
    }

    struct FailingStore;

    #[async_trait]
    impl HabitStore for FailingStore {
        async fn load(&self) -> Result<Vec<Habit>, StorageError> {
            Ok(Vec::new())
        }

        async fn save(&self, _habits: &[Habit]) -> Result<(), StorageError> {
            Err(StorageError::io(
                "unwritable.json",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ))
        }
    }

    #[tokio::test]
    async fn write_failures_keep_the_in_memory_change() {
        let mut dashboard = Dashboard::open(Arc::new(FailingStore), Arc::new(FixedClock::on(today()))).await;

        let id = dashboard.add_habit("Read").await.unwrap();
        assert_eq!(dashboard.toggle_habit_today(&id).await, Some(true));
        assert_eq!(dashboard.habits().len(), 1);
    }
}
