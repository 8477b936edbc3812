pub mod assembler;
pub mod category;
pub mod directory;
pub mod inference;
pub mod preferences;
pub mod presentation;
pub mod prompt;
pub mod store;

pub use crate::domain::model::{
    AccessInfo, AccessibilityFeature, GeoPoint, InferenceFailure, InferenceOutcome, PlaceResult,
    Venue, VenueCategory,
};
pub use crate::domain::ports::{CompletionService, PlaceSource, Storage};
pub use crate::utils::error::Result;
