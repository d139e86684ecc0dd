use reqwest::{Client, Url};
use thiserror::Error;

use crate::models::weather::WeatherRecord;

pub const DEFAULT_SERVER: &str = "http://localhost:3001";

#[derive(Debug, Error, PartialEq)]
pub enum ClientError {
    #[error("city name must not be empty")]
    EmptyCity,
    #[error("invalid server url \"{0}\"")]
    InvalidServer(String),
    /// Every failure to get a record from the server ends up here, whatever
    /// the server said about it.
    #[error("Unable to fetch weather data. Please try again.")]
    Unavailable,
}

/// Http client for the weather api.
pub struct WeatherClient {
    client: Client,
    server: Url,
}

impl WeatherClient {
    pub fn new(server: &str) -> Result<Self, ClientError> {
        let server =
            Url::parse(server).map_err(|_| ClientError::InvalidServer(server.to_string()))?;
        if server.cannot_be_a_base() {
            return Err(ClientError::InvalidServer(server.to_string()));
        }
        Ok(WeatherClient {
            client: Client::new(),
            server,
        })
    }

    /// Fetches the weather for a city. Blank input is refused before any
    /// request is made, otherwise the name is sent exactly as given.
    pub async fn fetch_city(&self, city: &str) -> Result<WeatherRecord, ClientError> {
        if city.trim().is_empty() {
            return Err(ClientError::EmptyCity);
        }
        self.fetch(self.endpoint(&["api", "weather", city])?).await
    }

    pub async fn fetch_coordinates(
        &self,
        lat: &str,
        lon: &str,
    ) -> Result<WeatherRecord, ClientError> {
        self.fetch(self.endpoint(&["api", "weather", "coords", lat, lon])?)
            .await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.server.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidServer(self.server.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch(&self, url: Url) -> Result<WeatherRecord, ClientError> {
        let response = self.client.get(url).send().await.map_err(|error| {
            log::debug!("Failed to reach weather server: {}", error);
            ClientError::Unavailable
        })?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("Weather server responded with {}", status);
            return Err(ClientError::Unavailable);
        }

        response.json().await.map_err(|error| {
            log::debug!("Failed to parse weather record: {}", error);
            ClientError::Unavailable
        })
    }
}
