use std::sync::Arc;

use anyhow::Context;

use crate::clock::{Clock, DayBoundary, SystemClock};
use crate::config::AppConfig;
use crate::meal_changes::MealChangeGovernor;
use crate::storage::{JsonFileStore, KvStore, MemoryStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub governor: Arc<MealChangeGovernor>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let store = Arc::new(
            JsonFileStore::open(config.store_path.clone())
                .await
                .context("open meal-change store")?,
        ) as Arc<dyn KvStore>;
        let clock = Arc::new(SystemClock::new(config.day_boundary)) as Arc<dyn Clock>;
        Ok(Self::from_parts(config, store, clock))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        store: Arc<dyn KvStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            governor: Arc::new(MealChangeGovernor::new(store, clock)),
        }
    }

    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            store_path: "unused".into(),
            day_boundary: DayBoundary::Utc,
        });
        let store = Arc::new(MemoryStore::new()) as Arc<dyn KvStore>;
        let clock = Arc::new(SystemClock::new(DayBoundary::Utc)) as Arc<dyn Clock>;
        Self::from_parts(config, store, clock)
    }
}
