use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const ORIGIN: GeoPoint = GeoPoint { lat: 0.0, lng: 0.0 };
}

/// A place as delivered by the place-search collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceResult {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub location: Option<GeoPoint>,
    pub phone: Option<String>,
    pub types: Vec<String>,
    pub rating: Option<f64>,
    /// "Day: Hours" lines in source order.
    pub weekday_text: Option<Vec<String>>,
    pub photo_urls: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueCategory {
    Restaurant,
    Pool,
    MovieTheater,
    Museum,
    ShoppingMall,
    Park,
}

impl VenueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VenueCategory::Restaurant => "restaurant",
            VenueCategory::Pool => "pool",
            VenueCategory::MovieTheater => "movie_theater",
            VenueCategory::Museum => "museum",
            VenueCategory::ShoppingMall => "shopping_mall",
            VenueCategory::Park => "park",
        }
    }
}

impl fmt::Display for VenueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessibilityFeature {
    WheelchairAccessible,
    Braille,
    SignLanguage,
    HearingLoop,
    AccessibleParking,
    AccessibleRestroom,
    GuideDogFriendly,
    StaffAssistance,
    VisualAlerts,
    AudioDescription,
    Elevator,
}

impl AccessibilityFeature {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessibilityFeature::WheelchairAccessible => "wheelchair_accessible",
            AccessibilityFeature::Braille => "braille",
            AccessibilityFeature::SignLanguage => "sign_language",
            AccessibilityFeature::HearingLoop => "hearing_loop",
            AccessibilityFeature::AccessibleParking => "accessible_parking",
            AccessibilityFeature::AccessibleRestroom => "accessible_restroom",
            AccessibilityFeature::GuideDogFriendly => "guide_dog_friendly",
            AccessibilityFeature::StaffAssistance => "staff_assistance",
            AccessibilityFeature::VisualAlerts => "visual_alerts",
            AccessibilityFeature::AudioDescription => "audio_description",
            AccessibilityFeature::Elevator => "elevator",
        }
    }
}

impl fmt::Display for AccessibilityFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisabilityType {
    Wheelchair,
    Visual,
    Hearing,
    Cognitive,
    Mobility,
}

/// A directory entry. Never mutated once it is in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub category: VenueCategory,
    pub address: String,
    pub phone: String,
    pub features: Vec<AccessibilityFeature>,
    pub opening_hours: IndexMap<String, String>,
    pub description: String,
    pub image_url: String,
    pub rating: f64,
    pub suitable_for: Vec<DisabilityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

/// Accessibility fields as the language model reported them.
///
/// Nothing is defaulted: a field the model left out, or sent with the wrong
/// JSON type, stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessInfo {
    #[serde(default, deserialize_with = "loose_string")]
    pub business_name: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub is_wheelchair_accessible: Option<bool>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub has_accessible_restrooms: Option<bool>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub has_accessible_parking: Option<bool>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub has_elevator: Option<bool>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub has_braille_signs: Option<bool>,
    #[serde(default, deserialize_with = "loose_string")]
    pub comments: Option<String>,
}

fn loose_bool<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool())
}

fn loose_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

/// Why an inference attempt produced no accessibility data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceFailure {
    #[error("language model service unreachable: {0}")]
    Transport(String),

    #[error("language model rejected the API key")]
    Unauthorized,

    #[error("language model rate or credit limit reached")]
    RateLimited,

    #[error("language model returned HTTP {code}")]
    Status { code: u16 },

    #[error("language model returned content that is not JSON")]
    Unparsable { content: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum InferenceOutcome {
    Inferred(AccessInfo),
    Failed(InferenceFailure),
}

impl InferenceOutcome {
    pub fn access_info(&self) -> Option<&AccessInfo> {
        match self {
            InferenceOutcome::Inferred(info) => Some(info),
            InferenceOutcome::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&InferenceFailure> {
        match self {
            InferenceOutcome::Inferred(_) => None,
            InferenceOutcome::Failed(failure) => Some(failure),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Body of a chat-completion call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}
