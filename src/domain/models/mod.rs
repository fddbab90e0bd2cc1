pub mod game;
pub mod message;

pub use game::{GameDetails, GameRecord};
pub use message::{OutboundMessage, SentMessage};
