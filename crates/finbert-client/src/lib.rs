pub mod error;
pub mod response;

pub use error::{FinbertError, FinbertResult};
pub use response::{decode_response, LabelScore, ModelOutput};

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

use pulse_core::{
    truncate_input, Classification, PulseError, SentimentClassifier, SentimentLabel,
    MAX_CLASSIFY_CHARS,
};

pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/ProsusAI/finbert";

/// Remote-service sentiment classifier backed by a hosted FinBERT endpoint.
///
/// Policy: a warm-up error payload from the service degrades to Neutral/0.5
/// and the run continues, whatever HTTP status accompanies it; transport
/// failures and malformed payloads propagate. Confidence below the floor forces the label to Neutral while
/// keeping the raw confidence, matching the service-side behavior callers
/// already rely on.
pub struct FinbertClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    confidence_floor: f64,
}

impl FinbertClient {
    pub fn new(endpoint: String, api_key: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint,
            api_key,
            confidence_floor: 0.60,
        }
    }

    pub fn with_confidence_floor(mut self, floor: f64) -> Self {
        self.confidence_floor = floor;
        self
    }

    async fn classify_remote(&self, text: &str) -> FinbertResult<Classification> {
        let payload = json!({ "inputs": truncate_input(text, MAX_CLASSIFY_CHARS) });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        // The service reports warm-up through an `{"error": ...}` payload,
        // sometimes alongside a non-2xx status. The body decides, not the
        // status code; the status only matters when the body is unusable.
        let status = response.status();
        let value: serde_json::Value = if status.is_success() {
            response.json().await?
        } else {
            let body = response.text().await.unwrap_or_default();
            match serde_json::from_str(&body) {
                Ok(value) => value,
                Err(_) => {
                    return Err(FinbertError::ServiceUnavailable(format!("Status: {status}")))
                }
            }
        };

        match decode_response(&value) {
            ModelOutput::Warming(msg) => {
                tracing::warn!("FinBERT still loading, degrading to neutral: {}", msg);
                Ok(Classification::neutral_fallback())
            }
            ModelOutput::Malformed(msg) => {
                if status.is_success() {
                    Err(FinbertError::InvalidResponse(msg))
                } else {
                    Err(FinbertError::ServiceUnavailable(format!("Status: {status}")))
                }
            }
            ModelOutput::Scores(scores) => {
                classification_from_scores(&scores, self.confidence_floor).ok_or_else(|| {
                    FinbertError::InvalidResponse("empty prediction array".to_string())
                })
            }
        }
    }
}

/// Pick the arg-max class and apply the low-confidence floor. `None` when
/// there are no scores to pick from.
pub(crate) fn classification_from_scores(
    scores: &[LabelScore],
    floor: f64,
) -> Option<Classification> {
    let best = scores.iter().max_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    })?;

    let label = match best.label.as_str() {
        "positive" => SentimentLabel::Positive,
        "negative" => SentimentLabel::Negative,
        _ => SentimentLabel::Neutral,
    };

    let label = if best.score < floor {
        SentimentLabel::Neutral
    } else {
        label
    };

    Some(Classification::new(label, best.score))
}

#[async_trait]
impl SentimentClassifier for FinbertClient {
    async fn classify(&self, text: &str) -> Result<Classification, PulseError> {
        Ok(self.classify_remote(text).await?)
    }

    fn name(&self) -> &'static str {
        "finbert-remote"
    }
}
