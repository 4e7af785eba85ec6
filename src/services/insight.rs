//! Insight generation via an external text-generation service
//!
//! Sends feedback text and ratings to an Ollama-style completion endpoint and
//! parses the reply into a sentiment label, a summary and actionable
//! insights. The call is strictly best-effort: any failure (network, non-2xx,
//! timeout, unparseable or wrong-shaped reply) yields a fixed neutral
//! fallback and is never surfaced to the submitting client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Config;
use crate::db::models::ServiceRating;

/// Sentiment label returned by the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Structured analysis of one feedback submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAnalysis {
    pub sentiment: Sentiment,
    pub summary: String,
    pub actionable_insights: Vec<String>,
}

impl FeedbackAnalysis {
    /// Fixed value substituted on any analysis failure
    pub fn fallback() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            summary: "Unable to analyze feedback due to an error.".to_string(),
            actionable_insights: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
enum InsightError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response is not the expected JSON shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Request body for the generation endpoint
#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Reply envelope: the model's text lives in `response`
#[derive(Deserialize)]
struct GenerateReply {
    response: String,
}

/// Client for the external insight endpoint
#[derive(Clone, Debug)]
pub struct InsightService {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl InsightService {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.insight_timeout_ms))
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: format!("{}/api/generate", config.ollama_url.trim_end_matches('/')),
            model: config.ollama_model.clone(),
        }
    }

    /// Analyze one feedback submission; never fails, falls back instead.
    pub async fn analyze(&self, feedback_text: &str, ratings: &[ServiceRating]) -> FeedbackAnalysis {
        match self.request(feedback_text, ratings).await {
            Ok(analysis) => {
                tracing::debug!(sentiment = ?analysis.sentiment, "Feedback analyzed");
                analysis
            }
            Err(e) => {
                tracing::warn!(error = %e, "Insight generation failed, using fallback");
                FeedbackAnalysis::fallback()
            }
        }
    }

    async fn request(
        &self,
        feedback_text: &str,
        ratings: &[ServiceRating],
    ) -> Result<FeedbackAnalysis, InsightError> {
        let prompt = build_prompt(feedback_text, ratings);
        let body = GenerateRequest {
            model: &self.model,
            prompt: &prompt,
            stream: false,
        };

        let reply: GenerateReply = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_analysis(&reply.response)
    }
}

fn build_prompt(feedback_text: &str, ratings: &[ServiceRating]) -> String {
    let ratings_json = serde_json::to_string(ratings).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"You are an AI tasked with analyzing customer feedback and ratings for a service.
Given the following:
- Feedback: "{feedback_text}"
- Ratings: {ratings_json}

Provide a response in JSON format with the following structure:
{{
  "sentiment": "positive/neutral/negative",
  "summary": "A concise summary of the feedback",
  "actionableInsights": ["Insight 1", "Insight 2", ...]
}}

The actionable insights should be specific, quantifiable suggestions based on the feedback text and ratings, e.g., "20% want quieter music", "35% recommend more vegan options".
Ensure the response is valid JSON without Markdown formatting (e.g., no ```json markers).
"#
    )
}

/// Strip Markdown code fences the model may wrap its JSON in
fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Parse and shape-check the model's reply. The reply is untrusted input:
/// field presence and types are enforced by deserialization, extra fields
/// are ignored.
fn parse_analysis(raw: &str) -> Result<FeedbackAnalysis, InsightError> {
    let analysis: FeedbackAnalysis = serde_json::from_str(strip_code_fences(raw))?;
    Ok(analysis)
}
