use pulse_core::{Classification, Direction, SentimentLabel};

/// Maps a classification plus keyword boost to a final score and direction.
///
/// The confidence floor is enforced here so both classifier variants get a
/// uniform treatment: below the floor a classification counts as Neutral no
/// matter what label the model emitted, while the raw confidence is kept.
#[derive(Debug, Clone)]
pub struct ScoreCombiner {
    confidence_floor: Option<f64>,
    article_threshold: f64,
}

impl ScoreCombiner {
    pub fn new(confidence_floor: Option<f64>, article_threshold: f64) -> Self {
        Self {
            confidence_floor,
            article_threshold,
        }
    }

    /// The label after the floor rule.
    pub fn effective_label(&self, classification: &Classification) -> SentimentLabel {
        match self.confidence_floor {
            Some(floor) if classification.confidence < floor => SentimentLabel::Neutral,
            _ => classification.label,
        }
    }

    pub fn combine(&self, classification: &Classification, boost: f64) -> (f64, Direction) {
        let base = match self.effective_label(classification) {
            SentimentLabel::Positive => classification.confidence,
            SentimentLabel::Negative => -classification.confidence,
            SentimentLabel::Neutral => 0.0,
        };

        let final_score = base + boost;
        (
            final_score,
            Direction::from_score(final_score, self.article_threshold),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combiner() -> ScoreCombiner {
        ScoreCombiner::new(Some(0.60), 0.3)
    }

    #[test]
    fn test_signed_base_score() {
        let c = combiner();
        let (score, direction) =
            c.combine(&Classification::new(SentimentLabel::Positive, 0.9), 0.0);
        assert!((score - 0.9).abs() < 1e-9);
        assert_eq!(direction, Direction::Up);

        let (score, direction) =
            c.combine(&Classification::new(SentimentLabel::Negative, 0.8), 0.0);
        assert!((score + 0.8).abs() < 1e-9);
        assert_eq!(direction, Direction::Down);

        let (score, direction) =
            c.combine(&Classification::new(SentimentLabel::Neutral, 0.95), 0.0);
        assert!(score.abs() < 1e-9);
        assert_eq!(direction, Direction::Flat);
    }

    #[test]
    fn test_floor_treats_low_confidence_as_neutral() {
        let c = combiner();
        for confidence in [0.0, 0.3, 0.59, 0.599_999] {
            let (score, direction) = c.combine(
                &Classification::new(SentimentLabel::Positive, confidence),
                0.0,
            );
            assert!(score.abs() < 1e-9, "confidence {confidence} leaked through");
            assert_eq!(direction, Direction::Flat);
        }
    }

    #[test]
    fn test_floor_disabled_passes_label_through() {
        let c = ScoreCombiner::new(None, 0.3);
        let (score, direction) =
            c.combine(&Classification::new(SentimentLabel::Negative, 0.2), 0.0);
        assert!((score + 0.2).abs() < 1e-9);
        assert_eq!(direction, Direction::Flat);
    }

    #[test]
    fn test_boost_added_after_floor() {
        let c = combiner();
        // Floored to neutral, boost alone carries the score.
        let (score, direction) =
            c.combine(&Classification::new(SentimentLabel::Positive, 0.5), 0.6);
        assert!((score - 0.6).abs() < 1e-9);
        assert_eq!(direction, Direction::Up);
    }

    #[test]
    fn test_direction_monotonic_across_buckets() {
        // Drive the final score upward purely through the boost term and
        // check the bucket ordering never goes backwards.
        let c = combiner();
        let neutral = Classification::new(SentimentLabel::Neutral, 0.9);
        let mut last = Direction::Down;
        for boost in [-1.0, -0.31, 0.0, 0.31, 1.0] {
            let (_, direction) = c.combine(&neutral, boost);
            assert!(direction >= last);
            last = direction;
        }
    }
}
