use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::fs;

use crate::{
    audio::AudioPayload,
    error::{Result, VouchError},
    provider::ProviderConfig,
    types::ReportData,
};

/// Fixed instruction set sent alongside the audio.
const ANALYSIS_PROMPT: &str = r#"You are an expert audio analyst. You are given an audio recording of a dealer testimonial. Transcribe it verbatim, translate it to English, and perform a detailed sentiment analysis.

Instructions:
1. Transcribe: Listen to the audio and transcribe the speech verbatim in its original language. Break the transcript into sections of 20-30 seconds, including timestamps (e.g., [00:00 - 00:25]).
2. Translate: Provide a faithful, conversational English translation for each transcribed section.
3. Analyze:
   - Write a concise overall summary of the testimonial in 2-3 sentences.
   - Determine the overall sentiment (Positive, Neutral, Negative) with a confidence score.
   - Identify key emotional markers (e.g., Trust, Satisfaction, Excitement).
   - Extract key positive phrases and any negative/frictional points mentioned.
   - Identify and extract the most impactful, marketable quotes from the English translation.
4. Format: Structure the entire output according to the provided JSON schema. Ensure the 'marketableQuotes' array is populated with the best quotes for marketing use."#;

/// Response schema declared to the model. Field names and required-ness
/// must stay in lockstep with [`ReportData`].
fn response_schema() -> Value {
    let sentiment = json!({
        "type": "OBJECT",
        "properties": {
            "sentiment": { "type": "STRING", "description": "One of 'Positive', 'Negative', or 'Neutral'" },
            "confidence": { "type": "NUMBER", "description": "A value between 0 and 1" }
        },
        "required": ["sentiment", "confidence"]
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "overallSummary": {
                "type": "STRING",
                "description": "A concise summary of the entire testimonial in a few sentences, capturing the main points and overall tone."
            },
            "overallSentiment": sentiment.clone(),
            "emotionalMarkers": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of identified emotional tones like 'Trust', 'Satisfaction'."
            },
            "keyPositivePhrases": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Exact key phrases that are positive."
            },
            "frictionalPoints": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Any points of friction or negativity mentioned."
            },
            "marketableQuotes": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Short, impactful quotes from the translation suitable for marketing."
            },
            "sections": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "timestamp": { "type": "STRING", "description": "e.g., '[00:00 - 00:28]'" },
                        "original": { "type": "STRING", "description": "The verbatim transcript in the original language." },
                        "translation": { "type": "STRING", "description": "The English translation." },
                        "sentiment": sentiment,
                        "notes": { "type": "STRING", "description": "Brief analysis of this section." }
                    },
                    "required": ["timestamp", "original", "translation", "sentiment", "notes"]
                }
            }
        },
        "required": [
            "overallSummary",
            "overallSentiment",
            "emotionalMarkers",
            "keyPositivePhrases",
            "frictionalPoints",
            "marketableQuotes",
            "sections"
        ]
    })
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

/// Backend that turns an audio payload into a structured report.
#[async_trait]
pub trait Analyzer {
    async fn analyze(&self, audio: &AudioPayload) -> Result<ReportData>;
}

pub struct GeminiAnalyzer {
    client: reqwest::Client,
    config: ProviderConfig,
    api_key: String,
}

impl GeminiAnalyzer {
    /// Build the analyzer, failing early when the API key is missing.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let api_key = config.validate_api_key()?;
        Ok(Self {
            client: reqwest::Client::new(),
            config,
            api_key,
        })
    }
}

#[async_trait]
impl Analyzer for GeminiAnalyzer {
    async fn analyze(&self, audio: &AudioPayload) -> Result<ReportData> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: audio.mime_type.clone(),
                            data: audio.data.clone(),
                        },
                    },
                    Part::Text {
                        text: ANALYSIS_PROMPT.to_string(),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        let response = self
            .client
            .post(self.config.generate_content_url(&self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(VouchError::ServiceFailed { status, body });
        }

        let envelope: GenerateContentResponse = response.json().await?;
        let text = envelope
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or(VouchError::EmptyResponse)?;

        parse_report(text)
    }
}

/// Parse the model's JSON payload into [`ReportData`].
///
/// A missing required field or a blank summary fails with a data-shape
/// error instead of reaching the renderer.
pub fn parse_report(text: &str) -> Result<ReportData> {
    let report: ReportData =
        serde_json::from_str(text.trim()).map_err(|e| VouchError::InvalidReport {
            reason: e.to_string(),
        })?;

    if report.overall_summary.trim().is_empty() {
        return Err(VouchError::InvalidReport {
            reason: "overallSummary is empty".to_string(),
        });
    }

    Ok(report)
}

/// Save a report to a file as pretty-printed JSON.
pub async fn save_report(report: &ReportData, path: &Path) -> Result<()> {
    let pretty_json = serde_json::to_string_pretty(report)?;
    fs::write(path, &pretty_json).await?;
    Ok(())
}
