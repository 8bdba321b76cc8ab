use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Serenity error: {0}")]
    Serenity(Box<poise::serenity_prelude::Error>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Genius API error ({status}): {message}")]
    GeniusApi {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Genius response error: {0}")]
    GeniusResponse(String),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("No lyrics could be extracted from {0}")]
    LyricsUnavailable(String),
}

impl From<poise::serenity_prelude::Error> for BotError {
    fn from(err: poise::serenity_prelude::Error) -> Self {
        BotError::Serenity(Box::new(err))
    }
}

impl BotError {
    /// Returns a user-friendly error message suitable for displaying in Discord.
    ///
    /// Internal detail is never included.
    pub fn user_message(&self) -> String {
        match self {
            BotError::Serenity(_) => {
                "Sorry, I'm having trouble communicating with Discord right now. Please try again later.".to_string()
            }
            BotError::Config(_) | BotError::EnvVar(_) => {
                "Sorry, there's a configuration issue on my end. Please contact the bot administrator.".to_string()
            }
            BotError::GeniusApi { .. }
            | BotError::GeniusResponse(_)
            | BotError::Reqwest(_)
            | BotError::LyricsUnavailable(_) => {
                "An error occurred while fetching lyrics.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lyrics_errors_hide_internal_detail() {
        let err = BotError::GeniusResponse("missing field `hits` at line 1".to_string());
        let message = err.user_message();
        assert_eq!(message, "An error occurred while fetching lyrics.");
        assert!(!message.contains("hits"));
    }

    #[test]
    fn config_errors_point_at_administrator() {
        let err = BotError::Config("CLIENT_ID is not a number".to_string());
        assert!(err.user_message().contains("bot administrator"));
    }
}
