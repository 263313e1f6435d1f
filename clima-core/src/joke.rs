use reqwest::StatusCode;
use serde::Deserialize;

use crate::{
    error::LookupError,
    transport::{HttpTransport, Transport},
};

/// Default random-joke endpoint.
pub const JOKE_URL: &str = "https://official-joke-api.appspot.com/random_joke";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

/// Client for the public random-joke API.
#[derive(Debug, Clone)]
pub struct JokeClient<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl JokeClient<HttpTransport> {
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }
}

impl Default for JokeClient<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> JokeClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            base_url: JOKE_URL.to_string(),
            transport,
        }
    }

    /// Point the client at a different endpoint, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch one random joke.
    ///
    /// Mirrors the weather path: any non-200 status is `Ok(None)`, and a
    /// 200 body without `setup` and `punchline` is a parse failure.
    pub async fn fetch(&self) -> Result<Option<Joke>, LookupError> {
        let res = self.transport.get(&self.base_url).await?;

        if res.status() != StatusCode::OK {
            return Ok(None);
        }

        let joke = serde_json::from_str(res.body()).map_err(LookupError::BodyParse)?;

        Ok(Some(joke))
    }
}
