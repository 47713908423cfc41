use anyhow::Context;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";

#[derive(Debug, Clone)]
pub struct Config {
    /// Server-held key for the upstream news API. Never sent to clients.
    pub api_key: String,
    pub port: u16,
    pub base_url: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// `NEWS_API_KEY` is required; `PORT` and `GNEWS_BASE_URL` fall back to
    /// defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key =
            std::env::var("NEWS_API_KEY").context("NEWS_API_KEY environment variable not set")?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT is not a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        let base_url =
            std::env::var("GNEWS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            port,
            base_url,
        })
    }
}
