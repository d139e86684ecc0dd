use axum::{
    Router,
    extract::{Json, Path, State},
    routing::get,
};

use crate::app::AppState;
use crate::error::InternalError;
use crate::models::weather::WeatherRecord;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/{city}", get(get_weather_by_city))
        .route("/coords/{lat}/{lon}", get(get_weather_by_coordinates))
        .with_state(state)
}

async fn get_weather_by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<WeatherRecord>, InternalError> {
    Ok(Json(state.provider.by_city(&city).await?))
}

async fn get_weather_by_coordinates(
    State(state): State<AppState>,
    Path((lat, lon)): Path<(String, String)>,
) -> Result<Json<WeatherRecord>, InternalError> {
    Ok(Json(state.provider.by_coordinates(&lat, &lon).await?))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::{ErrorResponse, FETCH_FAILED_MESSAGE, WeatherError};
    use crate::models::weather::{Condition, Coordinates, Weekday};
    use crate::provider::{MockWeatherProvider, WeatherProvider};
    use crate::weather::{
        FEELS_LIKE_RANGE, FORECAST_HIGH_RANGE, FORECAST_LOW_RANGE, HUMIDITY_RANGE,
        TEMPERATURE_RANGE, WIND_SPEED_RANGE,
    };
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{self, Request, StatusCode, header},
        response::Response,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    struct BrokenProvider;

    #[async_trait]
    impl WeatherProvider for BrokenProvider {
        async fn by_city(&self, _city: &str) -> Result<WeatherRecord, WeatherError> {
            Err(WeatherError::SourcePoisoned)
        }

        async fn by_coordinates(
            &self,
            _lat: &str,
            _lon: &str,
        ) -> Result<WeatherRecord, WeatherError> {
            Err(WeatherError::SourcePoisoned)
        }
    }

    fn mock_routes() -> Router {
        routes(AppState {
            provider: MockWeatherProvider::new().into_handle(),
        })
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method(http::Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            mime::APPLICATION_JSON.as_ref()
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_get_weather_by_city() {
        let response = get(mock_routes(), "/london").await;
        assert_eq!(response.status(), StatusCode::OK);

        let record: WeatherRecord = json_body(response).await;
        assert_eq!(record.city, "London");
        assert_eq!(record.coordinates, None);
        assert!(TEMPERATURE_RANGE.contains(&record.temperature));
        assert!(HUMIDITY_RANGE.contains(&record.humidity));
        assert!(WIND_SPEED_RANGE.contains(&record.wind_speed));
        assert!(FEELS_LIKE_RANGE.contains(&record.feels_like));
        assert_eq!(record.forecast.len(), 5);
        for (forecast, day) in record.forecast.iter().zip(Weekday::ALL) {
            assert_eq!(forecast.day, day);
            assert!(FORECAST_HIGH_RANGE.contains(&forecast.high));
            assert!(FORECAST_LOW_RANGE.contains(&forecast.low));
        }
    }

    #[tokio::test]
    async fn city_is_percent_decoded_and_not_trimmed() {
        let response = get(mock_routes(), "/neW%20york%20").await;
        assert_eq!(response.status(), StatusCode::OK);

        let record: WeatherRecord = json_body(response).await;
        assert_eq!(record.city, "NeW york ");
    }

    #[tokio::test]
    async fn test_get_weather_by_coordinates() {
        let response = get(mock_routes(), "/coords/51.5/-0.12").await;
        assert_eq!(response.status(), StatusCode::OK);

        let record: WeatherRecord = json_body(response).await;
        assert_eq!(record.city, "Current Location");
        assert_eq!(
            record.coordinates,
            Some(Coordinates {
                lat: "51.5".to_string(),
                lon: "-0.12".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn coordinates_are_not_validated() {
        let response = get(mock_routes(), "/coords/north/9000").await;
        assert_eq!(response.status(), StatusCode::OK);

        let record: WeatherRecord = json_body(response).await;
        let coordinates = record.coordinates.unwrap();
        assert_eq!(coordinates.lat, "north");
        assert_eq!(coordinates.lon, "9000");
    }

    #[tokio::test]
    async fn stormy_only_appears_in_current_conditions() {
        let app = routes(AppState {
            provider: MockWeatherProvider::with_seed(3).into_handle(),
        });
        let mut seen_stormy = false;
        for _ in 0..200 {
            let record: WeatherRecord = json_body(get(app.clone(), "/visby").await).await;
            seen_stormy |= record.condition == Condition::Stormy;
            for day in record.forecast.iter() {
                assert_ne!(Condition::from(day.condition), Condition::Stormy);
            }
        }
        assert!(seen_stormy);
    }

    #[tokio::test]
    async fn provider_failure_gives_generic_error() {
        let app = routes(AppState {
            provider: Arc::new(BrokenProvider),
        });

        for uri in ["/london", "/coords/1/2"] {
            let response = get(app.clone(), uri).await;
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let body: ErrorResponse = json_body(response).await;
            assert_eq!(
                body,
                ErrorResponse {
                    error: FETCH_FAILED_MESSAGE.to_string()
                }
            );
        }
    }

    #[tokio::test]
    async fn incomplete_coordinates_are_not_found() {
        let response = get(mock_routes(), "/coords/51.5").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
