use std::io::Error;

use chrono::Local;
use sqlx::postgres::PgPoolOptions;
use tokio::main;
use tracing_subscriber::EnvFilter;

use gameday_notifier::{
    application::usecases::{
        game_today::GameTodayUseCase, send_daily_greeting::SendDailyGreetingUseCase,
    },
    config::Config,
    infrastructure::{
        messaging::telegram::TelegramClient,
        repositories::postgres::PostgresGameScheduleRepository,
    },
};

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::try_parse().map_err(Error::other)?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url)
        .await
        .map_err(Error::other)?;

    let schedule = PostgresGameScheduleRepository::new(pool);
    let notifier = TelegramClient::new(config.bot_token);
    let greeting = SendDailyGreetingUseCase::new(
        GameTodayUseCase::new(schedule),
        notifier,
        config.group_id,
    );

    // The invocation itself never fails: lookup and delivery errors are
    // logged inside the use case and the trigger consumes no return value.
    greeting.execute(Local::now().date_naive()).await;

    Ok(())
}
