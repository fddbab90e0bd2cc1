use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::models::GameRecord;

/// Read-only access to the externally-owned game schedule table.
///
/// Implementations must return rows in a stable order for a fixed table
/// state, so that selection among several same-day records stays
/// deterministic.
#[async_trait]
pub trait GameScheduleRepository: Send + Sync {
    async fn games_on(&self, date: NaiveDate) -> anyhow::Result<Vec<GameRecord>>;
}
