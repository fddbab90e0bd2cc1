use std::sync::Arc;

use chrono::{Locale, NaiveDate};
use tracing::error;

use crate::{
    application::{
        services::{greeting, notifier::NotifierClient},
        usecases::game_today::GameTodayUseCase,
    },
    domain::models::{OutboundMessage, SentMessage},
};

/// Locale of the daily message; the team chat is Russian-speaking.
const MESSAGE_LOCALE: Locale = Locale::ru_RU;

pub struct SendDailyGreetingUseCase {
    game_today: GameTodayUseCase,
    notifier: Arc<dyn NotifierClient>,
    recipient: String,
}

impl SendDailyGreetingUseCase {
    pub fn new(
        game_today: GameTodayUseCase,
        notifier: Arc<dyn NotifierClient>,
        recipient: String,
    ) -> Self {
        Self {
            game_today,
            notifier,
            recipient,
        }
    }

    /// One full invocation: look up the day's game, compose the greeting
    /// and send it to the team chat. Lookup and delivery failures are
    /// logged and swallowed, so a failed invocation never escalates past
    /// the trigger. The returned outcome exists for callers that want it;
    /// `main` discards it.
    pub async fn execute(&self, today: NaiveDate) -> Option<SentMessage> {
        let game = match self.game_today.execute(today).await {
            Ok(game) => game,
            Err(err) => {
                error!("failed to load game info: {err}");
                None
            }
        };

        let message = OutboundMessage {
            recipient: self.recipient.clone(),
            text: greeting::compose_daily_message(today, MESSAGE_LOCALE, game.as_ref()),
        };

        match self.notifier.send_message(&message).await {
            Ok(sent) => Some(sent),
            Err(err) => {
                error!("failed to send message: {err}");
                None
            }
        }
    }
}
