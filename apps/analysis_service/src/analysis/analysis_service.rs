use std::env;

use isafe_llm::{GeminiService, LLMService};
use thiserror::Error;
use uuid::Uuid;

use super::fallback::demo_report;
use super::report::AnalysisReport;
use super::sanitize::strip_code_fences;
use crate::prompts::scam_analysis_prompt::ScamAnalysisPrompt;

#[derive(Debug, Error)]
pub enum AnalysisFailure {
    #[error("no Gemini API key available")]
    MissingApiKey,

    #[error("provider call failed: {0}")]
    Api(#[from] anyhow::Error),

    #[error("model reply was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AnalysisFailure {
    /// User-facing wording. Kept generic; the error detail stays in local logs.
    pub fn notice(&self) -> &'static str {
        match self {
            AnalysisFailure::MissingApiKey => {
                "No API key configured. Showing a demo analysis instead."
            }
            AnalysisFailure::Api(_) => {
                "API Error detected. Switching to DEMO MODE for verification."
            }
            AnalysisFailure::Decode(_) => {
                "Error parsing model response. Showing a demo analysis instead."
            }
        }
    }
}

/// What the handler renders. Never an error: every failure class is folded
/// into the demo report with `demo_mode` set and a generic notice.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub analysis_id: String,
    pub report: AnalysisReport,
    pub demo_mode: bool,
    pub notice: Option<String>,
}

#[derive(Clone)]
pub struct AnalysisService;

impl AnalysisService {
    pub fn new() -> Self {
        Self
    }

    /// Run one analysis against the Gemini API, or the demo fallback when no
    /// key is available or the provider cannot be built.
    pub async fn analyze_message(&self, api_key: Option<String>, message: &str) -> AnalysisOutcome {
        let Some(api_key) = api_key else {
            return Self::demo_outcome(new_analysis_id(), AnalysisFailure::MissingApiKey);
        };

        match Self::build_provider(api_key) {
            Ok(provider) => self.analyze_with(&provider, message).await,
            Err(failure) => Self::demo_outcome(new_analysis_id(), failure),
        }
    }

    /// The provider-agnostic pipeline: prompt, call, sanitize, decode. Any
    /// failure yields the demo outcome instead of an error.
    pub async fn analyze_with(&self, llm: &dyn LLMService, message: &str) -> AnalysisOutcome {
        let analysis_id = new_analysis_id();

        match self.request_report(llm, message).await {
            Ok(report) => {
                tracing::info!(
                    analysis_id = %analysis_id,
                    risk_level = %report.risk_level,
                    "analysis complete"
                );
                AnalysisOutcome {
                    analysis_id,
                    report,
                    demo_mode: false,
                    notice: None,
                }
            }
            Err(failure) => Self::demo_outcome(analysis_id, failure),
        }
    }

    /// One prompt, one provider call, no retry.
    pub async fn request_report(
        &self,
        llm: &dyn LLMService,
        message: &str,
    ) -> Result<AnalysisReport, AnalysisFailure> {
        let prompt = ScamAnalysisPrompt::get_prompt(message);
        let reply = llm.generate_text(&prompt).await?;

        let cleaned = strip_code_fences(&reply);
        match serde_json::from_str::<AnalysisReport>(&cleaned) {
            Ok(report) => Ok(report),
            Err(error) => {
                // The raw reply stays in local logs; the client only ever
                // sees the generic notice.
                tracing::error!(
                    error = %error,
                    raw_reply = %reply,
                    "failed to decode model reply"
                );
                Err(AnalysisFailure::Decode(error))
            }
        }
    }

    fn build_provider(api_key: String) -> Result<GeminiService, AnalysisFailure> {
        let provider = GeminiService::new(api_key)?;

        Ok(match env::var("GEMINI_MODEL") {
            Ok(model) if !model.trim().is_empty() => provider.with_model(model.trim()),
            _ => provider,
        })
    }

    fn demo_outcome(analysis_id: String, failure: AnalysisFailure) -> AnalysisOutcome {
        match &failure {
            AnalysisFailure::MissingApiKey => {
                tracing::warn!(
                    analysis_id = %analysis_id,
                    "no API key available, serving the demo analysis"
                );
            }
            AnalysisFailure::Api(error) => {
                tracing::warn!(
                    analysis_id = %analysis_id,
                    error = %error,
                    "API error, switching to demo mode"
                );
            }
            AnalysisFailure::Decode(error) => {
                tracing::error!(
                    analysis_id = %analysis_id,
                    error = %error,
                    "undecodable model reply, serving the demo analysis"
                );
            }
        }

        AnalysisOutcome {
            analysis_id,
            report: demo_report(),
            demo_mode: true,
            notice: Some(failure.notice().to_string()),
        }
    }
}

fn new_analysis_id() -> String {
    Uuid::new_v4().to_string()
}
