//! Random source backed by a remote random number service

use std::time::Duration;
use async_trait::async_trait;
use tracing::debug;

use crate::config::BattleConfig;
use crate::error::RandomSourceError;
use crate::traits::RandomSource;

/// Fetches one decimal fraction per sample from an HTTP endpoint.
///
/// The endpoint must answer with a plain-text number such as `0.42`.
#[derive(Clone)]
pub struct HttpRandomSource {
    client: reqwest::Client,
    url: String,
}

impl HttpRandomSource {
    /// Create a source for `url` with a per-request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RandomSourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &BattleConfig) -> Result<Self, RandomSourceError> {
        Self::new(config.random_url.clone(), config.request_timeout)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Parse a plain-text sample body into a value in `[0, 1)`
pub fn parse_sample(body: &str) -> Result<f64, RandomSourceError> {
    let trimmed = body.trim();
    let value: f64 = trimmed.parse().map_err(|_| RandomSourceError::Parse {
        body: trimmed.to_string(),
    })?;
    if !(0.0..1.0).contains(&value) {
        return Err(RandomSourceError::OutOfRange { value });
    }
    Ok(value)
}

#[async_trait]
impl RandomSource for HttpRandomSource {
    async fn sample(&self) -> Result<f64, RandomSourceError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RandomSourceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let value = parse_sample(&body)?;
        debug!(url = %self.url, value, "Fetched random sample");
        Ok(value)
    }
}
