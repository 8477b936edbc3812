// Adapters layer: HTTP clients for the external services.

pub mod openai;
pub mod places;
