use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::{models::GameRecord, repositories::GameScheduleRepository};

/// Vec-backed store; result order is insertion order.
#[derive(Default)]
pub struct InMemoryGameScheduleRepository {
    games: Arc<RwLock<Vec<GameRecord>>>,
}

impl InMemoryGameScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: GameRecord) {
        let mut games = self.games.write().await;
        games.push(record);
    }
}

#[async_trait]
impl GameScheduleRepository for InMemoryGameScheduleRepository {
    async fn games_on(&self, date: NaiveDate) -> anyhow::Result<Vec<GameRecord>> {
        let games = self.games.read().await;
        Ok(games
            .iter()
            .filter(|game| game.game_date == date)
            .cloned()
            .collect())
    }
}
