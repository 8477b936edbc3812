use crate::domain::model::{CompletionRequest, InferenceFailure, PlaceResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// A remote text-completion service. One call, one completion.
///
/// A response without any completion text is `Ok` with an empty string.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> std::result::Result<String, InferenceFailure>;
}

#[async_trait]
pub trait PlaceSource: Send + Sync {
    async fn place_details(&self, place_id: &str) -> Result<PlaceResult>;
}
