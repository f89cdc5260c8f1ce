use pulse_core::{
    Article, ArticleRecord, BatchReport, BatchSummary, Direction, PulseResult,
    SentimentClassifier,
};

use crate::{InsightAnnotator, KeywordBooster, RelevanceFilter, ScoreCombiner, ScoringConfig};

/// Runs the scoring chain over one batch of articles.
///
/// Input order is preserved in the output records. Irrelevant articles are
/// recorded but never classified and never counted; the summary is only
/// produced when at least one article was considered, so a zero-article
/// average cannot occur.
pub struct ArticleAggregator {
    filter: RelevanceFilter,
    booster: KeywordBooster,
    combiner: ScoreCombiner,
    annotator: InsightAnnotator,
    boost_enabled: bool,
    aggregate_threshold: f64,
}

impl ArticleAggregator {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            filter: RelevanceFilter::new(config.market_keywords.clone()),
            booster: KeywordBooster::new(
                config.positive_keywords.clone(),
                config.negative_keywords.clone(),
                config.boost_increment,
            ),
            combiner: ScoreCombiner::new(config.confidence_floor, config.article_threshold),
            annotator: InsightAnnotator::new(),
            boost_enabled: config.boost_enabled,
            aggregate_threshold: config.aggregate_threshold,
        }
    }

    pub async fn run(
        &self,
        classifier: &dyn SentimentClassifier,
        articles: &[Article],
    ) -> PulseResult<BatchReport> {
        let mut records = Vec::with_capacity(articles.len());
        let mut total_score = 0.0;
        let mut considered = 0usize;

        for article in articles {
            let content = article.content();

            if !self.filter.is_relevant(&content) {
                tracing::debug!(title = %article.title, "filtered: not market relevant");
                records.push(ArticleRecord {
                    article: article.clone(),
                    relevant: false,
                    classification: None,
                    final_score: 0.0,
                    direction: Direction::Flat,
                    insight: String::new(),
                });
                continue;
            }

            considered += 1;
            let raw = classifier.classify(&content).await?;
            let boost = if self.boost_enabled {
                self.booster.boost(&content)
            } else {
                0.0
            };
            let (final_score, direction) = self.combiner.combine(&raw, boost);
            // Recorded classifications carry the post-floor label; the raw
            // confidence is kept.
            let label = self.combiner.effective_label(&raw);
            let classification = pulse_core::Classification::new(label, raw.confidence);
            let insight = self.annotator.annotate(&content, label).to_string();

            tracing::debug!(
                title = %article.title,
                label = label.to_label(),
                confidence = classification.confidence,
                boost,
                final_score,
                "scored article"
            );

            total_score += final_score;
            records.push(ArticleRecord {
                article: article.clone(),
                relevant: true,
                classification: Some(classification),
                final_score,
                direction,
                insight,
            });
        }

        if considered == 0 {
            tracing::info!(
                received = articles.len(),
                "no market-relevant articles in batch"
            );
            return Ok(BatchReport {
                records,
                summary: None,
            });
        }

        let direction = Direction::from_score(total_score, self.aggregate_threshold);
        let summary = BatchSummary {
            considered,
            total_score,
            average_score: total_score / considered as f64,
            direction,
            today_sentiment: direction.as_daily_sentiment(),
        };

        tracing::info!(
            considered,
            total_score,
            direction = direction.to_label(),
            "batch scored"
        );

        Ok(BatchReport {
            records,
            summary: Some(summary),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pulse_core::{Classification, PulseError, SentimentLabel};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Returns canned classifications in call order.
    struct StubClassifier {
        outputs: Mutex<VecDeque<Classification>>,
    }

    impl StubClassifier {
        fn new(outputs: Vec<Classification>) -> Self {
            Self {
                outputs: Mutex::new(outputs.into()),
            }
        }
    }

    #[async_trait]
    impl SentimentClassifier for StubClassifier {
        async fn classify(&self, _text: &str) -> Result<Classification, PulseError> {
            self.outputs
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| PulseError::Classification("stub exhausted".to_string()))
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            description: String::new(),
            url: "https://example.com/a".to_string(),
        }
    }

    fn config_without_floor() -> ScoringConfig {
        ScoringConfig {
            confidence_floor: None,
            boost_enabled: false,
            ..ScoringConfig::default()
        }
    }

    #[tokio::test]
    async fn test_three_article_scenario() {
        // One irrelevant, two relevant scoring +0.8 and -0.2.
        let aggregator = ArticleAggregator::new(&config_without_floor());
        let classifier = StubClassifier::new(vec![
            Classification::new(SentimentLabel::Positive, 0.8),
            Classification::new(SentimentLabel::Negative, 0.2),
        ]);
        let articles = vec![
            article("Local bakery celebrates anniversary"),
            article("Stock indices climb on trade deal hopes"),
            article("Bank issues cautious outlook"),
        ];

        let report = aggregator.run(&classifier, &articles).await.unwrap();

        assert_eq!(report.records.len(), 3);
        assert!(!report.records[0].relevant);
        assert!(report.records[0].classification.is_none());

        let summary = report.summary.expect("two articles were considered");
        assert_eq!(summary.considered, 2);
        assert!((summary.total_score - 0.6).abs() < 1e-9);
        assert!((summary.average_score - 0.3).abs() < 1e-9);
        assert_eq!(summary.direction, Direction::Flat);
        assert_eq!(summary.today_sentiment, 0);
    }

    #[tokio::test]
    async fn test_empty_batch_has_no_summary() {
        let aggregator = ArticleAggregator::new(&ScoringConfig::default());
        let classifier = StubClassifier::new(vec![]);

        let report = aggregator.run(&classifier, &[]).await.unwrap();
        assert!(report.records.is_empty());
        assert!(report.summary.is_none());
    }

    #[tokio::test]
    async fn test_all_filtered_batch_has_no_summary() {
        let aggregator = ArticleAggregator::new(&ScoringConfig::default());
        // Never called, so an exhausted stub is fine.
        let classifier = StubClassifier::new(vec![]);
        let articles = vec![
            article("Museum reopens after renovation"),
            article("City marathon draws big crowd"),
        ];

        let report = aggregator.run(&classifier, &articles).await.unwrap();
        assert_eq!(report.records.len(), 2);
        assert!(report.records.iter().all(|r| !r.relevant));
        assert!(report.summary.is_none());
    }

    #[tokio::test]
    async fn test_input_order_preserved() {
        let aggregator = ArticleAggregator::new(&config_without_floor());
        let classifier = StubClassifier::new(vec![
            Classification::new(SentimentLabel::Positive, 0.9),
            Classification::new(SentimentLabel::Negative, 0.9),
        ]);
        let articles = vec![
            article("Nasdaq rallies to fresh peak"),
            article("Concert tickets sell out fast"),
            article("Treasury yields tick higher"),
        ];

        let report = aggregator.run(&classifier, &articles).await.unwrap();
        let titles: Vec<&str> = report
            .records
            .iter()
            .map(|r| r.article.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Nasdaq rallies to fresh peak",
                "Concert tickets sell out fast",
                "Treasury yields tick higher",
            ]
        );
        assert!(report.records[0].relevant);
        assert!(!report.records[1].relevant);
        assert!(report.records[2].relevant);
    }

    #[tokio::test]
    async fn test_classifier_failure_propagates() {
        let aggregator = ArticleAggregator::new(&ScoringConfig::default());
        let classifier = StubClassifier::new(vec![]);
        let articles = vec![article("Earnings season kicks off")];

        let result = aggregator.run(&classifier, &articles).await;
        assert!(matches!(result, Err(PulseError::Classification(_))));
    }

    #[tokio::test]
    async fn test_aggregate_direction_uses_total_threshold() {
        let aggregator = ArticleAggregator::new(&config_without_floor());
        let classifier = StubClassifier::new(vec![
            Classification::new(SentimentLabel::Positive, 0.8),
            Classification::new(SentimentLabel::Positive, 0.7),
        ]);
        let articles = vec![
            article("Oil majors post record cash flow"),
            article("Gold miners extend gains"),
        ];

        let report = aggregator.run(&classifier, &articles).await.unwrap();
        let summary = report.summary.unwrap();
        // Total 1.5 clears the aggregate threshold of 1.0 even though each
        // article alone would not.
        assert!((summary.total_score - 1.5).abs() < 1e-9);
        assert_eq!(summary.direction, Direction::Up);
        assert_eq!(summary.today_sentiment, 1);
    }
}
