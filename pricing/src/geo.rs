//! # Geocoded Distances
//!
//! Resolves a customer address to a coordinate, then asks the routing
//! service for the real road distance from the store. The two calls are
//! dependent, the matrix call needs the geocoder's coordinate, so they run
//! strictly in sequence.
//!
//! Both calls carry the client-wide timeout; a timeout or transport failure
//! surfaces as [`QuoteError::Unavailable`] and the quote is refused.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::{
    error::QuoteError,
    fee::{TierRates, tier_fee},
    models::{GEOCODE_ENDPOINT, GeocodeResponse, MatrixResponse, ROUTE_MATRIX_ENDPOINT},
};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Both fields must be finite and inside valid geographic ranges.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        valid.then_some(Self {
            latitude,
            longitude,
        })
    }
}

#[async_trait]
pub trait Geocode {
    async fn resolve(&self, address: &str) -> Result<Coordinate, QuoteError>;
}

#[async_trait]
pub trait RoadDistance {
    async fn distance_km(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<f64, QuoteError>;
}

pub struct GeoapifyClient {
    client: Client,
    api_key: String,
    geocode_url: String,
    matrix_url: String,
}

impl GeoapifyClient {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoints(
            api_key,
            GEOCODE_ENDPOINT.to_string(),
            ROUTE_MATRIX_ENDPOINT.to_string(),
        )
    }

    pub fn with_endpoints(api_key: String, geocode_url: String, matrix_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("HTTP client misconfigured!");

        Self {
            client,
            api_key,
            geocode_url,
            matrix_url,
        }
    }
}

#[async_trait]
impl Geocode for GeoapifyClient {
    async fn resolve(&self, address: &str) -> Result<Coordinate, QuoteError> {
        let response = self
            .client
            .get(&self.geocode_url)
            .query(&[
                ("text", address),
                ("limit", "1"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let decoded: GeocodeResponse = response.json().await?;

        let feature = decoded
            .features
            .into_iter()
            .next()
            .ok_or(QuoteError::AddressNotFound)?;

        // GeoJSON order is [longitude, latitude].
        let [longitude, latitude] = feature.geometry.coordinates;

        Coordinate::new(latitude, longitude).ok_or(QuoteError::AddressNotFound)
    }
}

#[async_trait]
impl RoadDistance for GeoapifyClient {
    async fn distance_km(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<f64, QuoteError> {
        let payload = json!({
            "mode": "drive",
            "sources": [{ "location": [origin.longitude, origin.latitude] }],
            "targets": [{ "location": [destination.longitude, destination.latitude] }],
        });

        let response = self
            .client
            .post(&self.matrix_url)
            .query(&[("apiKey", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let decoded: MatrixResponse = response.json().await?;

        // One source, one target: the only relevant cell is [0][0].
        let meters = decoded
            .sources_to_targets
            .first()
            .and_then(|row| row.first())
            .and_then(|cell| cell.distance)
            .ok_or(QuoteError::RouteNotFound)?;

        Ok(meters / 1000.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoQuote {
    pub fee: f64,
    pub distance_km: f64,
}

pub async fn geo_fee(
    geocoder: &impl Geocode,
    router: &impl RoadDistance,
    rates: &TierRates,
    store: Coordinate,
    address: &str,
) -> Result<GeoQuote, QuoteError> {
    let destination = geocoder.resolve(address).await?;
    let distance_km = router.distance_km(store, destination).await?;

    Ok(GeoQuote {
        fee: tier_fee(rates, distance_km),
        distance_km,
    })
}
