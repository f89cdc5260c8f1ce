use serde::{Deserialize, Serialize};

/// A business news article as handed over by the news source.
///
/// The description may be empty but is never absent; upstream clients are
/// expected to substitute an empty string for missing fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl Article {
    /// The text the pipeline scores: title and description joined the way
    /// headlines read in a feed.
    pub fn content(&self) -> String {
        format!("{}. {}", self.title, self.description)
    }
}

/// Three-class sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn to_label(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

/// Output of a sentiment classifier for one piece of text.
///
/// `confidence` is the maximum class probability, in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Classification {
    pub label: SentimentLabel,
    pub confidence: f64,
}

impl Classification {
    pub fn new(label: SentimentLabel, confidence: f64) -> Self {
        Self { label, confidence }
    }

    /// Neutral at 0.5 confidence, the degraded-service substitute.
    pub fn neutral_fallback() -> Self {
        Self::new(SentimentLabel::Neutral, 0.5)
    }
}

/// Directional bucket for a score. Ordering is meaningful:
/// Down < Flat < Up, and bucketing is monotonic in the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Down,
    Flat,
    Up,
}

impl Direction {
    /// Bucket a score with a symmetric threshold: strictly above `threshold`
    /// is Up, strictly below `-threshold` is Down, everything else Flat.
    pub fn from_score(score: f64, threshold: f64) -> Self {
        if score > threshold {
            Direction::Up
        } else if score < -threshold {
            Direction::Down
        } else {
            Direction::Flat
        }
    }

    /// Integer daily sentiment as persisted in the trend store.
    pub fn as_daily_sentiment(&self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
            Direction::Flat => 0,
        }
    }

    pub fn to_label(&self) -> &'static str {
        match self {
            Direction::Up => "Positive Bias",
            Direction::Down => "Negative Bias",
            Direction::Flat => "Neutral",
        }
    }
}

/// Multi-day trend verdict from the rolling sentiment window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    /// Fewer than two retained days, nothing to compare yet.
    Insufficient,
    Improving,
    Worsening,
    Stable,
}

impl TrendDirection {
    pub fn to_label(&self) -> &'static str {
        match self {
            TrendDirection::Insufficient => "Trend: not enough data yet",
            TrendDirection::Improving => "Trend: sentiment improving",
            TrendDirection::Worsening => "Trend: sentiment worsening",
            TrendDirection::Stable => "Trend: sentiment stable",
        }
    }
}

/// Per-article outcome of one pipeline run.
///
/// A record with `relevant = false` was filtered out before classification:
/// its classification is absent and it contributes nothing to the batch
/// totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub article: Article,
    pub relevant: bool,
    pub classification: Option<Classification>,
    pub final_score: f64,
    pub direction: Direction,
    pub insight: String,
}

/// Batch totals over the considered (relevant) articles of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub considered: usize,
    pub total_score: f64,
    pub average_score: f64,
    /// Bucketing of `total_score` against the aggregate threshold.
    pub direction: Direction,
    /// -1, 0 or 1; what the trend store records for today.
    pub today_sentiment: i32,
}

/// Full result of a pipeline run.
///
/// `summary` is absent when no article survived the relevance filter; the
/// caller must render the dedicated "no relevant news" message instead of
/// an averaged summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub records: Vec<ArticleRecord>,
    pub summary: Option<BatchSummary>,
}

impl BatchReport {
    pub fn considered_count(&self) -> usize {
        self.records.iter().filter(|r| r.relevant).count()
    }
}
