use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::{
    errors::ScheduleError, models::GameDetails, repositories::GameScheduleRepository,
};

pub struct GameTodayUseCase {
    schedule: Arc<dyn GameScheduleRepository>,
}

impl GameTodayUseCase {
    pub fn new(schedule: Arc<dyn GameScheduleRepository>) -> Self {
        Self { schedule }
    }

    /// Loads the day's game time and venue if a confirmed game exists.
    ///
    /// Among several confirmed records on the same date (not expected, but
    /// possible upstream) the first one in repository order is selected.
    pub async fn execute(&self, date: NaiveDate) -> Result<Option<GameDetails>, ScheduleError> {
        let games = self.schedule.games_on(date).await?;
        match games.into_iter().find(|game| game.is_confirmed()) {
            Some(record) => {
                info!(
                    "today we play at {} at {}",
                    record.game_time, record.game_venue
                );
                Ok(Some(record.into()))
            }
            None => {
                info!("no game today");
                Ok(None)
            }
        }
    }
}
