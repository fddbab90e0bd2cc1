pub mod game_today;
pub mod send_daily_greeting;
