use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the externally-owned game schedule table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_date: NaiveDate,
    pub game_time: String,
    pub game_venue: String,
    /// Boolean-like flag: 1 means the game is confirmed and published.
    pub is_poll_created: i16,
}

impl GameRecord {
    pub fn is_confirmed(&self) -> bool {
        self.is_poll_created == 1
    }
}

/// Time and venue of a confirmed game, as consumed by the daily greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDetails {
    pub time: String,
    pub venue: String,
}

impl From<GameRecord> for GameDetails {
    fn from(record: GameRecord) -> Self {
        Self {
            time: record.game_time,
            venue: record.game_venue,
        }
    }
}
