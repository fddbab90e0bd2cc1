use std::env::var;

use dotenvy::dotenv;

pub struct Config {
    pub bot_token: String,
    pub group_id: String,
    pub database_url: String,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Ok(Config {
            bot_token: var("BOT_TOKEN")
                .map_err(|_| "An error occured while getting BOT_TOKEN env param")?,
            group_id: var("GROUP_ID")
                .map_err(|_| "An error occured while getting GROUP_ID env param")?,
            database_url: var("DATABASE_URL")
                .map_err(|_| "An error occured while getting DATABASE_URL env param")?,
        })
    }
}
