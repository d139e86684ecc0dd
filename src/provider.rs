use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::{Arc, Mutex};

use crate::error::WeatherError;
use crate::models::weather::WeatherRecord;
use crate::weather::{generate_for_city, generate_for_coordinates};

/// Source of weather records for the http routes.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn by_city(&self, city: &str) -> Result<WeatherRecord, WeatherError>;
    async fn by_coordinates(&self, lat: &str, lon: &str) -> Result<WeatherRecord, WeatherError>;
}

pub type WeatherProviderHandle = Arc<dyn WeatherProvider>;

/// Synthesizes records instead of asking a real weather service.
///
/// Without a seed every request gets its own thread local generator and
/// nothing is shared between requests. With a seed all requests draw from the
/// same generator so that a whole run can be replayed.
pub struct MockWeatherProvider {
    seeded: Option<Mutex<StdRng>>,
}

impl MockWeatherProvider {
    pub fn new() -> Self {
        MockWeatherProvider { seeded: None }
    }

    pub fn with_seed(seed: u64) -> Self {
        MockWeatherProvider {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    pub fn into_handle(self) -> WeatherProviderHandle {
        Arc::new(self)
    }

    fn draw<F>(&self, generate: F) -> Result<WeatherRecord, WeatherError>
    where
        F: FnOnce(&mut dyn RngCore) -> WeatherRecord,
    {
        match &self.seeded {
            Some(rng) => {
                let mut rng = rng.lock().map_err(|_| WeatherError::SourcePoisoned)?;
                Ok(generate(&mut *rng))
            }
            None => Ok(generate(&mut rand::rng())),
        }
    }
}

impl Default for MockWeatherProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn by_city(&self, city: &str) -> Result<WeatherRecord, WeatherError> {
        self.draw(|rng| generate_for_city(rng, city))
    }

    async fn by_coordinates(&self, lat: &str, lon: &str) -> Result<WeatherRecord, WeatherError> {
        self.draw(|rng| generate_for_coordinates(rng, lat, lon))
    }
}
