use pulse_core::SentimentLabel;

/// Attaches a one-line categorical note to an article.
///
/// Rules are ordered and the first match wins: topic rules (inflation,
/// rate policy, earnings, oil) take precedence over the sentiment-based
/// fallbacks.
#[derive(Debug, Clone, Default)]
pub struct InsightAnnotator;

impl InsightAnnotator {
    pub fn new() -> Self {
        Self
    }

    pub fn annotate(&self, text: &str, sentiment: SentimentLabel) -> &'static str {
        let text_lower = text.to_lowercase();

        if text_lower.contains("inflation") {
            return "Inflation steers rate policy and purchasing power.";
        }
        if text_lower.contains("interest rate") || text_lower.contains("fed") {
            return "Rate policy moves equity valuations and global capital flows.";
        }
        if text_lower.contains("earnings") || text_lower.contains("revenue") {
            return "Company results are a primary catalyst for share prices.";
        }
        if text_lower.contains("oil") {
            return "Oil prices feed the energy sector and inflation pressure.";
        }

        match sentiment {
            SentimentLabel::Positive => "Sentiment supports short-term risk appetite.",
            SentimentLabel::Negative => "Sentiment pressure can trigger defensive moves.",
            SentimentLabel::Neutral => "Informational for now; needs further confirmation.",
        }
    }
}
