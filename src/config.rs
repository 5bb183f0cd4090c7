use std::path::PathBuf;

use crate::clock::DayBoundary;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub day_boundary: DayBoundary,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let store_path = std::env::var("STORE_PATH")
            .unwrap_or_else(|_| "mealgenie-data.json".into())
            .into();
        let day_boundary = match std::env::var("DAY_BOUNDARY").as_deref() {
            Ok("utc") | Err(_) => DayBoundary::Utc,
            Ok("local") => DayBoundary::Local,
            Ok(other) => anyhow::bail!("DAY_BOUNDARY must be \"utc\" or \"local\", got {other:?}"),
        };
        Ok(Self {
            store_path,
            day_boundary,
        })
    }
}
