use crate::domain::model::VenueCategory;

/// Place type tags checked in order; the first one present wins.
const CATEGORY_PRIORITY: [(&str, VenueCategory); 6] = [
    ("restaurant", VenueCategory::Restaurant),
    ("movie_theater", VenueCategory::MovieTheater),
    ("shopping_mall", VenueCategory::ShoppingMall),
    ("museum", VenueCategory::Museum),
    ("park", VenueCategory::Park),
    ("swimming_pool", VenueCategory::Pool),
];

/// Unmapped places fall back to restaurant.
pub fn map_place_types<S: AsRef<str>>(types: &[S]) -> VenueCategory {
    CATEGORY_PRIORITY
        .iter()
        .find(|(tag, _)| types.iter().any(|t| t.as_ref() == *tag))
        .map(|(_, category)| *category)
        .unwrap_or(VenueCategory::Restaurant)
}
