use serde::{Deserialize, Serialize};

/// Sentiment classification returned by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentiment {
    pub sentiment: SentimentLabel,
    /// Model confidence in [0, 1].
    pub confidence: f64,
}

/// One time-bounded chunk of the testimonial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub timestamp: String,
    pub original: String,
    pub translation: String,
    pub sentiment: Sentiment,
    pub notes: String,
}

/// The full analysis result, deserialized once from the model response.
///
/// Wire names are camelCase to match the declared response schema. Every
/// field is required; a missing field is a decode error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub overall_summary: String,
    pub overall_sentiment: Sentiment,
    pub emotional_markers: Vec<String>,
    pub key_positive_phrases: Vec<String>,
    pub frictional_points: Vec<String>,
    pub marketable_quotes: Vec<String>,
    pub sections: Vec<ReportSection>,
}
