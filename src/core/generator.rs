use async_trait::async_trait;

use crate::error::Result;

/// A hosted text-generation service.
///
/// `TripPlanner` only talks to the model through this trait, so tests can
/// swap in a canned implementation.
#[async_trait]
pub trait TextGenerator: Send + Sync + std::fmt::Debug {
    /// Names of the models visible to the configured credential.
    async fn list_models(&self) -> Result<Vec<String>>;

    /// Generate a reply for `prompt` at the given sampling temperature.
    async fn generate(&self, prompt: &str, temperature: f64) -> Result<String>;
}
