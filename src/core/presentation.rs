use crate::domain::model::{AccessibilityFeature, GeoPoint, Venue};

/// Language tag for the read-aloud text.
pub const NARRATION_LANGUAGE: &str = "he-IL";

/// Map centre used before any venue has been added (Jerusalem).
pub const DEFAULT_MAP_CENTER: GeoPoint = GeoPoint {
    lat: 31.7683,
    lng: 35.2137,
};

pub fn feature_label(feature: AccessibilityFeature) -> &'static str {
    match feature {
        AccessibilityFeature::WheelchairAccessible => "נגיש לכיסאות גלגלים",
        AccessibilityFeature::Braille => "כתב ברייל",
        AccessibilityFeature::SignLanguage => "שפת סימנים",
        AccessibilityFeature::HearingLoop => "לולאת השראה",
        AccessibilityFeature::AccessibleParking => "חניית נכים",
        AccessibilityFeature::AccessibleRestroom => "שירותי נכים",
        AccessibilityFeature::GuideDogFriendly => "ידידותי לכלבי נחייה",
        AccessibilityFeature::StaffAssistance => "סיוע צוות",
        AccessibilityFeature::VisualAlerts => "התראות חזותיות",
        AccessibilityFeature::AudioDescription => "תיאור קולי",
        AccessibilityFeature::Elevator => "מעלית נגישה",
    }
}

fn feature_labels(venue: &Venue) -> String {
    venue
        .features
        .iter()
        .map(|f| feature_label(*f))
        .collect::<Vec<_>>()
        .join(", ")
}

fn opening_hours_text(venue: &Venue) -> String {
    venue
        .opening_hours
        .iter()
        .map(|(day, hours)| format!("{}: {}", day, hours))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text handed to a speech synthesizer for the venue's read-aloud button.
pub fn narration_text(venue: &Venue) -> String {
    [
        format!("שם המקום: {}.", venue.name),
        format!("דירוג: {} כוכבים.", venue.rating),
        format!("תיאור: {}.", venue.description),
        format!("כתובת: {}.", venue.address),
        format!("טלפון: {}.", venue.phone),
        format!("שעות פתיחה: {}.", opening_hours_text(venue)),
        format!("אמצעי נגישות: {}.", feature_labels(venue)),
    ]
    .join("\n")
}

/// Plain-text venue card for terminal output.
pub fn card_text(venue: &Venue) -> String {
    let mut lines = vec![
        format!("{} ({}) ★ {}", venue.name, venue.category, venue.rating),
        format!("  כתובת: {}", venue.address),
        format!("  טלפון: {}", venue.phone),
    ];
    if !venue.description.is_empty() {
        lines.push(format!("  {}", venue.description));
    }
    for (day, hours) in &venue.opening_hours {
        lines.push(format!("  {}: {}", day, hours));
    }
    if !venue.features.is_empty() {
        lines.push(format!("  אמצעי נגישות: {}", feature_labels(venue)));
    }
    lines.push(format!("  {}", venue.image_url));
    lines.join("\n")
}

pub fn map_center(venues: &[Venue]) -> GeoPoint {
    venues
        .first()
        .and_then(|v| v.location)
        .unwrap_or(DEFAULT_MAP_CENTER)
}

/// Venues that can be placed on the map, with their coordinates.
pub fn map_markers<'a>(
    venues: impl IntoIterator<Item = &'a Venue>,
) -> Vec<(&'a Venue, GeoPoint)> {
    venues
        .into_iter()
        .filter_map(|v| v.location.map(|location| (v, location)))
        .collect()
}
