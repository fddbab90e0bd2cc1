use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, Pool, Postgres};

use crate::domain::{models::GameRecord, repositories::GameScheduleRepository};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct PostgresGameScheduleRepository {
    pool: PgPool,
}

impl PostgresGameScheduleRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl GameScheduleRepository for PostgresGameScheduleRepository {
    async fn games_on(&self, date: NaiveDate) -> anyhow::Result<Vec<GameRecord>> {
        let rows = sqlx::query_as::<_, GameScheduleRow>(
            r#"
            SELECT game_date, game_time, game_venue, is_poll_created
            FROM game_schedule
            WHERE game_date = $1
            ORDER BY game_time, game_venue
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(GameRecord::from).collect())
    }
}

#[derive(FromRow)]
struct GameScheduleRow {
    game_date: NaiveDate,
    game_time: String,
    game_venue: String,
    is_poll_created: i16,
}

impl From<GameScheduleRow> for GameRecord {
    fn from(row: GameScheduleRow) -> Self {
        Self {
            game_date: row.game_date,
            game_time: row.game_time,
            game_venue: row.game_venue,
            is_poll_created: row.is_poll_created,
        }
    }
}
