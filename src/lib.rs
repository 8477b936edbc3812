pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{openai::OpenAiClient, places::GooglePlacesClient};
pub use crate::config::{cli::LocalStorage, toml_config::AppConfig};
pub use crate::core::{
    directory::Directory, inference::InferenceClient, preferences::Preferences, store::VenueStore,
};
pub use crate::domain::model::{InferenceOutcome, PlaceResult, Venue};
pub use crate::utils::error::{DirectoryError, Result};
