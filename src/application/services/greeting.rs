use chrono::{Locale, NaiveDate};

use crate::domain::models::GameDetails;

const TEAM_MENTION: &str = "@applebruin";

/// Localized lowercase day-of-week name, e.g. "пятница" for ru_RU.
pub fn weekday_name(date: NaiveDate, locale: Locale) -> String {
    date.format_localized("%A", locale).to_string()
}

/// Full text of the daily message: the greeting plus either the game
/// details or the no-game suffix.
pub fn compose_daily_message(
    date: NaiveDate,
    locale: Locale,
    game: Option<&GameDetails>,
) -> String {
    let mut message = format!(
        "{TEAM_MENTION} Доброе утро! Сегодня {}.",
        weekday_name(date, locale)
    );
    match game {
        Some(details) => {
            message.push_str(&format!(" И мы играем в {} в {}!", details.time, details.venue));
        }
        None => message.push_str(" Квиза сегодня нет :("),
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        // 2024-01-01 was a Monday
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn weekday_name_follows_locale() {
        assert_eq!(weekday_name(monday(), Locale::ru_RU), "понедельник");
        assert_eq!(weekday_name(monday(), Locale::en_US), "Monday");
    }

    #[test]
    fn message_with_game_includes_time_and_venue() {
        let details = GameDetails {
            time: "19:00".to_string(),
            venue: "Pub A".to_string(),
        };
        let message = compose_daily_message(monday(), Locale::ru_RU, Some(&details));
        assert_eq!(
            message,
            "@applebruin Доброе утро! Сегодня понедельник. И мы играем в 19:00 в Pub A!"
        );
    }

    #[test]
    fn message_without_game_has_no_game_suffix() {
        let message = compose_daily_message(monday(), Locale::ru_RU, None);
        assert_eq!(
            message,
            "@applebruin Доброе утро! Сегодня понедельник. Квиза сегодня нет :("
        );
    }
}
