//! One meal swap per slot per calendar day.
//!
//! Records are keyed by `meal_changes_<YYYY-MM-DD>`, so a new day implicitly
//! starts every slot back at "unchanged" without touching old keys. Storage
//! failures propagate to the caller untouched.

use std::sync::Arc;

use tracing::debug;

use crate::clock::{day_key, Clock};
use crate::storage::KvStore;

use super::dto::{DayChanges, MealSlotChange, MealType};

const STORAGE_KEY_PREFIX: &str = "meal_changes_";

pub struct MealChangeGovernor {
    store: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
}

impl MealChangeGovernor {
    pub fn new(store: Arc<dyn KvStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    fn today_key(&self) -> String {
        format!("{STORAGE_KEY_PREFIX}{}", day_key(self.clock.today()))
    }

    /// Today's record, or the all-unchanged default. Never writes.
    async fn load_today(&self) -> anyhow::Result<DayChanges> {
        match self.store.get(&self.today_key()).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(DayChanges::default()),
        }
    }

    async fn save_today(&self, changes: &DayChanges) -> anyhow::Result<()> {
        self.store
            .set(&self.today_key(), serde_json::to_value(changes)?)
            .await?;
        Ok(())
    }

    /// Whether the slot still has its daily swap available.
    pub async fn can_change_meal(&self, meal: MealType) -> anyhow::Result<bool> {
        Ok(!self.load_today().await?.slot(meal).changed)
    }

    /// Stamp the slot as swapped, unconditionally. Does not reject a second
    /// swap; callers wanting the limit enforced in one step should use
    /// [`try_record_meal_change`](Self::try_record_meal_change).
    pub async fn record_meal_change(&self, meal: MealType, food_id: &str) -> anyhow::Result<()> {
        let mut changes = self.load_today().await?;
        *changes.slot_mut(meal) = MealSlotChange {
            changed: true,
            food_id: Some(food_id.to_string()),
            changed_at: Some(self.clock.now()),
        };
        self.save_today(&changes).await?;
        debug!(meal = %meal, food_id, "meal change recorded");
        Ok(())
    }

    /// Check-and-set in a single call: records the swap only if the slot is
    /// still unchanged, and reports whether it did. Removes the read-then-write
    /// race between `can_change_meal` and `record_meal_change` within one
    /// process; concurrent writers through a shared store can still race.
    pub async fn try_record_meal_change(
        &self,
        meal: MealType,
        food_id: &str,
    ) -> anyhow::Result<bool> {
        let mut changes = self.load_today().await?;
        if changes.slot(meal).changed {
            debug!(meal = %meal, "daily swap already used");
            return Ok(false);
        }
        *changes.slot_mut(meal) = MealSlotChange {
            changed: true,
            food_id: Some(food_id.to_string()),
            changed_at: Some(self.clock.now()),
        };
        self.save_today(&changes).await?;
        debug!(meal = %meal, food_id, "meal change recorded");
        Ok(true)
    }

    /// The swap record for a slot, if the slot was swapped today.
    pub async fn meal_change_record(
        &self,
        meal: MealType,
    ) -> anyhow::Result<Option<MealSlotChange>> {
        let changes = self.load_today().await?;
        let slot = changes.slot(meal);
        Ok(slot.changed.then(|| slot.clone()))
    }

    /// Every slot swapped today, in canonical order regardless of when the
    /// swaps happened.
    pub async fn changed_meals(&self) -> anyhow::Result<Vec<MealType>> {
        let changes = self.load_today().await?;
        Ok(MealType::ALL
            .into_iter()
            .filter(|meal| changes.slot(*meal).changed)
            .collect())
    }

    /// True only when history exists and today is not part of it. An empty
    /// store is first use, not a new day.
    pub async fn is_new_day(&self) -> anyhow::Result<bool> {
        let keys = self.store.list_keys(STORAGE_KEY_PREFIX).await?;
        if keys.is_empty() {
            return Ok(false);
        }
        Ok(!keys.contains(&self.today_key()))
    }

    /// Drop every stored day except today.
    pub async fn reset_daily_changes(&self) -> anyhow::Result<()> {
        let today = self.today_key();
        for key in self.store.list_keys(STORAGE_KEY_PREFIX).await? {
            if key != today {
                self.store.remove(&key).await?;
                debug!(key, "stale meal-change record removed");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Mutex;
    use time::macros::date;
    use time::{Date, OffsetDateTime};

    struct FixedClock(Mutex<Date>);

    impl FixedClock {
        fn new(date: Date) -> Arc<Self> {
            Arc::new(Self(Mutex::new(date)))
        }

        fn set(&self, date: Date) {
            *self.0.lock().unwrap() = date;
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> OffsetDateTime {
            self.0.lock().unwrap().midnight().assume_utc()
        }

        fn today(&self) -> Date {
            *self.0.lock().unwrap()
        }
    }

    fn governor() -> (MealChangeGovernor, Arc<MemoryStore>, Arc<FixedClock>) {
        let store = Arc::new(MemoryStore::new());
        let clock = FixedClock::new(date!(2024 - 01 - 01));
        let gov = MealChangeGovernor::new(store.clone(), clock.clone());
        (gov, store, clock)
    }

    #[tokio::test]
    async fn fresh_day_allows_one_swap_per_slot() {
        let (gov, _, _) = governor();

        assert!(gov.can_change_meal(MealType::Breakfast).await.unwrap());
        gov.record_meal_change(MealType::Breakfast, "F1").await.unwrap();

        assert!(!gov.can_change_meal(MealType::Breakfast).await.unwrap());
        assert!(gov.can_change_meal(MealType::Lunch).await.unwrap());
    }

    #[tokio::test]
    async fn can_change_meal_never_persists() {
        let (gov, store, _) = governor();
        assert!(gov.can_change_meal(MealType::Dinner).await.unwrap());
        assert!(store.list_keys("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn day_rollover_resets_every_slot() {
        let (gov, _, clock) = governor();
        gov.record_meal_change(MealType::Breakfast, "F1").await.unwrap();

        clock.set(date!(2024 - 01 - 02));
        assert!(gov.can_change_meal(MealType::Breakfast).await.unwrap());
        assert!(gov.changed_meals().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn try_record_refuses_the_second_swap() {
        let (gov, _, _) = governor();

        assert!(gov.try_record_meal_change(MealType::Lunch, "F1").await.unwrap());
        assert!(!gov.try_record_meal_change(MealType::Lunch, "F2").await.unwrap());

        // The refused swap must not overwrite the first record.
        let record = gov.meal_change_record(MealType::Lunch).await.unwrap().unwrap();
        assert_eq!(record.food_id.as_deref(), Some("F1"));
    }

    #[tokio::test]
    async fn record_returns_none_for_untouched_slots() {
        let (gov, _, _) = governor();
        assert!(gov.meal_change_record(MealType::Snack).await.unwrap().is_none());

        gov.record_meal_change(MealType::Snack, "F7").await.unwrap();
        let record = gov.meal_change_record(MealType::Snack).await.unwrap().unwrap();
        assert!(record.changed);
        assert_eq!(record.food_id.as_deref(), Some("F7"));
        assert!(record.changed_at.is_some());
    }

    #[tokio::test]
    async fn changed_meals_ignore_recording_order() {
        let (gov, _, _) = governor();
        gov.record_meal_change(MealType::Lunch, "F1").await.unwrap();
        gov.record_meal_change(MealType::Breakfast, "F2").await.unwrap();

        assert_eq!(
            gov.changed_meals().await.unwrap(),
            vec![MealType::Breakfast, MealType::Lunch]
        );
    }

    #[tokio::test]
    async fn new_day_is_false_on_an_empty_store() {
        let (gov, _, _) = governor();
        assert!(!gov.is_new_day().await.unwrap());
    }

    #[tokio::test]
    async fn new_day_flips_when_history_exists_without_today() {
        let (gov, _, clock) = governor();
        gov.record_meal_change(MealType::Dinner, "F1").await.unwrap();
        assert!(!gov.is_new_day().await.unwrap());

        clock.set(date!(2024 - 01 - 02));
        assert!(gov.is_new_day().await.unwrap());

        gov.record_meal_change(MealType::Dinner, "F2").await.unwrap();
        assert!(!gov.is_new_day().await.unwrap());
    }

    #[tokio::test]
    async fn reset_keeps_today_and_drops_history() {
        let (gov, store, clock) = governor();
        gov.record_meal_change(MealType::Breakfast, "F1").await.unwrap();

        clock.set(date!(2024 - 01 - 02));
        gov.record_meal_change(MealType::Lunch, "F2").await.unwrap();

        gov.reset_daily_changes().await.unwrap();

        assert_eq!(
            store.list_keys(STORAGE_KEY_PREFIX).await.unwrap(),
            vec!["meal_changes_2024-01-02"]
        );
        assert!(!gov.can_change_meal(MealType::Lunch).await.unwrap());
    }
}
