use async_trait::async_trait;
use std::collections::HashSet;

use pulse_core::{
    truncate_input, Classification, PulseError, SentimentClassifier, SentimentLabel,
    MAX_CLASSIFY_CHARS,
};

const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "don't", "doesn't", "didn't", "isn't", "aren't",
    "wasn't", "weren't", "won't", "wouldn't", "couldn't", "shouldn't", "hardly",
    "barely", "neither", "nor", "without",
];

/// How many words back a negation still flips a sentiment word.
const NEGATION_WINDOW: usize = 3;

/// Logit assigned to the neutral class before any evidence is seen. One
/// lexicon hit lands just above it, so a single word reads as a weak
/// positive/negative; two or more read as confident.
const NEUTRAL_PRIOR: f64 = 0.5;

const POSITIVE_WORDS: &[&str] = &[
    "bullish", "rally", "surge", "gain", "profit", "growth", "beat",
    "upgrade", "outperform", "strong", "positive", "rise", "increase",
    "breakthrough", "innovation", "success", "exceed", "momentum",
    "buy", "recommend", "optimistic", "record", "advance",
    "dividend", "buyback", "upside", "recovery", "rebound", "expansion",
    "robust", "accelerating", "raised", "tailwind",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bearish", "decline", "loss", "fall", "plunge", "crash", "miss",
    "downgrade", "underperform", "weak", "negative", "drop", "decrease",
    "concern", "risk", "fail", "disappoint", "slump", "sell",
    "warning", "pessimistic", "retreat", "fear", "trouble",
    "headwind", "lawsuit", "litigation", "recall", "investigation",
    "default", "bankruptcy", "layoff", "downside", "lowered",
];

/// In-process three-class sentiment model over financial word lists.
///
/// Evidence for each class is counted with negation-aware polarity, then
/// turned into probabilities with a softmax against a fixed neutral prior.
/// The arg-max class and its probability form the classification. Unlike
/// the remote variant there is no degrade path and no internal confidence
/// floor; callers wanting the floor apply it downstream.
pub struct LexiconModel {
    positive: Vec<&'static str>,
    negative: Vec<&'static str>,
}

impl LexiconModel {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.to_vec(),
            negative: NEGATIVE_WORDS.to_vec(),
        }
    }

    pub fn with_lexicons(positive: Vec<&'static str>, negative: Vec<&'static str>) -> Self {
        Self { positive, negative }
    }

    /// Count negation-adjusted positive and negative evidence in `text`.
    fn count_evidence(&self, text: &str) -> (u32, u32) {
        let text_lower = text.to_lowercase();
        let words: Vec<&str> = text_lower
            .split(|c: char| c.is_whitespace() || c == ',' || c == ';' || c == '.' || c == '!' || c == '?')
            .filter(|w| !w.is_empty())
            .collect();

        let positive_set: HashSet<&str> = self.positive.iter().copied().collect();
        let negative_set: HashSet<&str> = self.negative.iter().copied().collect();
        let negation_set: HashSet<&str> = NEGATION_WORDS.iter().copied().collect();

        let negation_positions: Vec<usize> = words
            .iter()
            .enumerate()
            .filter(|(_, w)| negation_set.contains(*w))
            .map(|(i, _)| i)
            .collect();

        let mut positive_hits = 0u32;
        let mut negative_hits = 0u32;

        for (i, word) in words.iter().enumerate() {
            let is_positive = positive_set.contains(*word);
            let is_negative = negative_set.contains(*word);

            if !is_positive && !is_negative {
                continue;
            }

            let negated = negation_positions
                .iter()
                .any(|&neg_pos| neg_pos < i && (i - neg_pos) <= NEGATION_WINDOW);

            match (is_positive, negated) {
                (true, false) | (false, true) => positive_hits += 1,
                (true, true) | (false, false) => negative_hits += 1,
            }
        }

        (positive_hits, negative_hits)
    }

    fn classify_text(&self, text: &str) -> Classification {
        let input = truncate_input(text, MAX_CLASSIFY_CHARS);
        let (positive_hits, negative_hits) = self.count_evidence(input);

        let logits = [
            (SentimentLabel::Positive, positive_hits as f64),
            (SentimentLabel::Negative, negative_hits as f64),
            (SentimentLabel::Neutral, NEUTRAL_PRIOR),
        ];

        let denom: f64 = logits.iter().map(|(_, z)| z.exp()).sum();
        let (label, probability) = logits
            .iter()
            .map(|&(label, z)| (label, z.exp() / denom))
            .fold((SentimentLabel::Neutral, 0.0), |best, candidate| {
                if candidate.1 > best.1 { candidate } else { best }
            });

        tracing::debug!(
            positive_hits,
            negative_hits,
            label = label.to_label(),
            confidence = probability,
            "lexicon model classification"
        );

        Classification::new(label, probability)
    }
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentClassifier for LexiconModel {
    async fn classify(&self, text: &str) -> Result<Classification, PulseError> {
        Ok(self.classify_text(text))
    }

    fn name(&self) -> &'static str {
        "lexicon-local"
    }
}
