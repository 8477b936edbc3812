use crate::adapters::openai::OpenAiClient;
use crate::adapters::places::GooglePlacesClient;
use crate::core::inference::{
    InferenceSettings, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TOP_P,
};
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const GOOGLE_MAPS_API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

/// Settings file. Every section and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub inference: InferenceConfig,
    pub places: PlacesConfig,
    pub preferences: PreferencesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: OpenAiClient::DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacesConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub language: String,
    pub region: String,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            endpoint: GooglePlacesClient::DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            language: "he".to_string(),
            region: "il".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    pub directory: String,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            directory: "./.venue-access".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads a TOML settings file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn inference_settings(&self) -> InferenceSettings {
        InferenceSettings {
            model: self.inference.model.clone(),
            max_tokens: self.inference.max_tokens,
            temperature: self.inference.temperature,
            top_p: self.inference.top_p,
        }
    }

    pub fn inference_api_key(&self) -> Option<String> {
        resolve_key(self.inference.api_key.as_deref(), OPENAI_API_KEY_ENV)
    }

    pub fn places_api_key(&self) -> Option<String> {
        resolve_key(self.places.api_key.as_deref(), GOOGLE_MAPS_API_KEY_ENV)
    }

    pub fn preferences_dir(&self) -> PathBuf {
        PathBuf::from(&self.preferences.directory)
    }

    pub fn openai_client(&self) -> OpenAiClient {
        OpenAiClient::new(self.inference_api_key()).with_endpoint(self.inference.endpoint.clone())
    }

    pub fn places_client(&self) -> GooglePlacesClient {
        GooglePlacesClient::new(self.places_api_key())
            .with_endpoint(self.places.endpoint.clone())
            .with_locale(self.places.language.clone(), self.places.region.clone())
    }
}

/// A configured key wins unless it is blank or an unresolved `${VAR}`.
fn resolve_key(configured: Option<&str>, env_var: &str) -> Option<String> {
    configured
        .map(str::trim)
        .filter(|key| !key.is_empty() && !ENV_VAR_PATTERN.is_match(key))
        .map(str::to_string)
        .or_else(|| std::env::var(env_var).ok().filter(|key| !key.trim().is_empty()))
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        let inference = &self.inference;
        validation::validate_endpoint("inference.endpoint", &inference.endpoint)?;
        validation::validate_non_empty("inference.model", &inference.model)?;
        validation::validate_range("inference.max_tokens", inference.max_tokens, 1, u32::MAX)?;
        validation::validate_range("inference.temperature", inference.temperature, 0.0, 2.0)?;
        validation::validate_range("inference.top_p", inference.top_p, 0.0, 1.0)?;

        validation::validate_endpoint("places.endpoint", &self.places.endpoint)?;
        validation::validate_non_empty("places.language", &self.places.language)?;
        validation::validate_non_empty("places.region", &self.places.region)?;

        validation::validate_non_empty("preferences.directory", &self.preferences.directory)?;
        Ok(())
    }
}
