use crate::core::category::map_place_types;
use crate::domain::model::{
    AccessInfo, AccessibilityFeature, GeoPoint, InferenceOutcome, PlaceResult, Venue,
};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4";

const HOURS_SEPARATOR: &str = ": ";

/// Builds a venue from a selected place and whatever the inference produced.
/// Cannot fail; a failed inference only leaves the venue without features
/// and description.
pub fn assemble_venue(
    place: &PlaceResult,
    inference: &InferenceOutcome,
    now: DateTime<Utc>,
) -> Venue {
    let info = inference.access_info();

    Venue {
        // Fallback ids are only unique while callers pass increasing millis.
        id: place
            .place_id
            .clone()
            .unwrap_or_else(|| now.timestamp_millis().to_string()),
        name: place.name.clone().unwrap_or_default(),
        category: map_place_types(place.types.as_slice()),
        address: place.formatted_address.clone().unwrap_or_default(),
        phone: place.phone.clone().unwrap_or_default(),
        features: accessibility_features(info),
        opening_hours: place
            .weekday_text
            .as_deref()
            .map(parse_opening_hours::<String>)
            .unwrap_or_default(),
        description: info.and_then(|i| i.comments.clone()).unwrap_or_default(),
        image_url: place
            .photo_urls
            .first()
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
        rating: place.rating.unwrap_or(0.0),
        suitable_for: Vec::new(),
        location: Some(place.location.unwrap_or(GeoPoint::ORIGIN)),
    }
}

pub fn accessibility_features(info: Option<&AccessInfo>) -> Vec<AccessibilityFeature> {
    let Some(info) = info else {
        return Vec::new();
    };

    [
        (info.is_wheelchair_accessible, AccessibilityFeature::WheelchairAccessible),
        (info.has_accessible_restrooms, AccessibilityFeature::AccessibleRestroom),
        (info.has_accessible_parking, AccessibilityFeature::AccessibleParking),
        (info.has_elevator, AccessibilityFeature::Elevator),
        (info.has_braille_signs, AccessibilityFeature::Braille),
    ]
    .into_iter()
    .filter(|(flag, _)| *flag == Some(true))
    .map(|(_, feature)| feature)
    .collect()
}

/// Parses "Day: Hours" lines. Lines without exactly one separator are skipped.
pub fn parse_opening_hours<S: AsRef<str>>(lines: &[S]) -> IndexMap<String, String> {
    let mut hours = IndexMap::new();

    for line in lines {
        let line = line.as_ref();
        let mut parts = line.split(HOURS_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(day), Some(text), None) => {
                hours.insert(day.to_string(), text.to_string());
            }
            _ => tracing::debug!("Skipping malformed opening-hours line: {:?}", line),
        }
    }

    hours
}
