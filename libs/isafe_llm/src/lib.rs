use anyhow::Result;
use async_trait::async_trait;

pub mod fake;
pub mod gemini;

pub use fake::FakeLLMService;
pub use gemini::GeminiService;

#[async_trait]
pub trait LLMService: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}
