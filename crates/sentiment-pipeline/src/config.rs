/// Configuration surface for the scoring pipeline.
///
/// Defaults reproduce the production scoring regime: keyword boosting on,
/// a 0.60 confidence floor enforced in the combiner, per-article direction
/// threshold 0.3 and aggregate threshold 1.0 (both symmetric), and quiet
/// days still recorded as neutral in the trend store.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Terms that make an article market-relevant (substring match).
    pub market_keywords: Vec<&'static str>,
    /// Boost lexicon, positive side.
    pub positive_keywords: Vec<&'static str>,
    /// Boost lexicon, negative side.
    pub negative_keywords: Vec<&'static str>,
    /// Additive score per distinct lexicon hit.
    pub boost_increment: f64,
    pub boost_enabled: bool,
    /// Confidence below this forces the label to Neutral; `None` disables
    /// the floor (matching the local-model default behavior).
    pub confidence_floor: Option<f64>,
    /// Symmetric per-article direction threshold.
    pub article_threshold: f64,
    /// Symmetric threshold applied to the batch total score.
    pub aggregate_threshold: f64,
    /// Whether an empty or fully filtered batch still writes a neutral
    /// entry into the trend store.
    pub record_empty_days: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            market_keywords: vec![
                "stock", "market", "shares", "earnings", "revenue",
                "inflation", "interest rate", "fed", "bank",
                "oil", "gold", "acquisition", "merger", "ipo",
                "downgrade", "upgrade", "forecast", "guidance",
                "economy", "bond", "treasury", "nasdaq", "s&p",
            ],
            positive_keywords: vec![
                "surge", "rally", "beat", "growth", "record",
                "upgrade", "profit", "gain", "strong", "recovery",
            ],
            negative_keywords: vec![
                "plunge", "crash", "miss", "downgrade", "loss",
                "lawsuit", "warning", "weak", "decline", "layoff",
            ],
            boost_increment: 0.3,
            boost_enabled: true,
            confidence_floor: Some(0.60),
            article_threshold: 0.3,
            aggregate_threshold: 1.0,
            record_empty_days: true,
        }
    }
}
