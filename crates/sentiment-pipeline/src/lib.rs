//! The daily market-sentiment scoring pipeline.
//!
//! Articles flow through relevance filtering, sentiment classification,
//! keyword-boosted score combination and batch aggregation. All knobs the
//! historical script variants disagreed on (lexicons, thresholds, the
//! confidence floor, the boost increment, the empty-day trend policy) live
//! on a single [`ScoringConfig`].

pub mod aggregate;
pub mod boost;
pub mod combine;
pub mod config;
pub mod filter;
pub mod insight;

pub use aggregate::ArticleAggregator;
pub use boost::KeywordBooster;
pub use combine::ScoreCombiner;
pub use config::ScoringConfig;
pub use filter::RelevanceFilter;
pub use insight::InsightAnnotator;
