use crate::domain::model::{GeoPoint, PlaceResult};
use crate::domain::ports::PlaceSource;
use crate::utils::error::{DirectoryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use url::Url;

/// Fields requested from the Place Details endpoint.
const DETAIL_FIELDS: &str = "place_id,name,formatted_address,geometry,\
formatted_phone_number,opening_hours,types,rating,photos";
const PHOTO_MAX_WIDTH: u32 = 800;
const REDACTED: &str = "REDACTED";

/// Google Places Details lookup, keyed by place id.
pub struct GooglePlacesClient {
    api_key: Option<String>,
    endpoint: String,
    language: String,
    region: String,
    client: Client,
}

impl GooglePlacesClient {
    pub const DEFAULT_ENDPOINT: &'static str = "https://maps.googleapis.com/maps/api/place";

    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            language: "he".to_string(),
            region: "il".to_string(),
            client: Client::new(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_locale(mut self, language: impl Into<String>, region: impl Into<String>) -> Self {
        self.language = language.into();
        self.region = region.into();
        self
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| DirectoryError::MissingConfigError {
                field: "places.api_key".to_string(),
            })
    }

    fn base(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }

    pub fn photo_url(&self, photo_reference: &str) -> Result<String> {
        let url = Url::parse_with_params(
            &format!("{}/photo", self.base()),
            &[
                ("maxwidth", PHOTO_MAX_WIDTH.to_string().as_str()),
                ("photo_reference", photo_reference),
                ("key", self.api_key()?),
            ],
        )
        .map_err(|e| DirectoryError::ConfigError {
            message: format!("Invalid places endpoint '{}': {}", self.endpoint, e),
        })?;
        Ok(url.to_string())
    }

    fn to_place_result(&self, details: PlaceDetails) -> Result<PlaceResult> {
        let photo_urls = details
            .photos
            .iter()
            .map(|photo| self.photo_url(&photo.photo_reference))
            .collect::<Result<Vec<_>>>()?;

        Ok(PlaceResult {
            place_id: details.place_id,
            name: details.name,
            formatted_address: details.formatted_address,
            location: details.geometry.map(|g| g.location),
            phone: details.formatted_phone_number,
            types: details.types,
            rating: details.rating,
            weekday_text: details.opening_hours.and_then(|h| h.weekday_text),
            photo_urls,
        })
    }
}

#[async_trait]
impl PlaceSource for GooglePlacesClient {
    async fn place_details(&self, place_id: &str) -> Result<PlaceResult> {
        let api_key = self.api_key()?;
        let url = format!("{}/details/json", self.base());

        tracing::debug!("Looking up place {} at {}", place_id, url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("place_id", place_id),
                ("fields", DETAIL_FIELDS),
                ("language", self.language.as_str()),
                ("region", self.region.as_str()),
                ("key", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::PlaceLookupError {
                place_id: place_id.to_string(),
                reason: format!("HTTP {}", status),
            });
        }

        let body: DetailsResponse = response.json().await?;
        match (body.status.as_str(), body.result) {
            ("OK", Some(details)) => self.to_place_result(details),
            (status, _) => Err(DirectoryError::PlaceLookupError {
                place_id: place_id.to_string(),
                reason: match body.error_message {
                    Some(message) => format!("{}: {}", status, message),
                    None => status.to_string(),
                },
            }),
        }
    }
}

/// Masks the `key` query parameter so a photo URL can be printed.
/// URLs without a key are returned unchanged.
pub fn redact_api_key(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };
    if !parsed.query_pairs().any(|(name, _)| name == "key") {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "key" {
                REDACTED.to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();
    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.to_string()
}

/// Reads a place saved as JSON in the [`PlaceResult`] shape.
pub async fn read_place_file(path: impl AsRef<Path>) -> Result<PlaceResult> {
    let data = tokio::fs::read(path.as_ref()).await?;
    Ok(serde_json::from_slice(&data)?)
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    result: Option<PlaceDetails>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceDetails {
    place_id: Option<String>,
    name: Option<String>,
    formatted_address: Option<String>,
    geometry: Option<Geometry>,
    formatted_phone_number: Option<String>,
    opening_hours: Option<OpeningHours>,
    #[serde(default)]
    types: Vec<String>,
    rating: Option<f64>,
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: GeoPoint,
}

#[derive(Debug, Deserialize)]
struct OpeningHours {
    weekday_text: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    photo_reference: String,
}
