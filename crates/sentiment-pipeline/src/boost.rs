/// Additive score adjustment from lexicon hits, independent of the model
/// classification.
///
/// The boost counts distinct matched terms, not occurrences, so repeating
/// a word never inflates the score and term order is irrelevant.
#[derive(Debug, Clone)]
pub struct KeywordBooster {
    positive: Vec<&'static str>,
    negative: Vec<&'static str>,
    increment: f64,
}

impl KeywordBooster {
    pub fn new(positive: Vec<&'static str>, negative: Vec<&'static str>, increment: f64) -> Self {
        Self {
            positive,
            negative,
            increment,
        }
    }

    pub fn boost(&self, text: &str) -> f64 {
        let text_lower = text.to_lowercase();
        let positive_hits = self
            .positive
            .iter()
            .filter(|k| text_lower.contains(*k))
            .count() as i64;
        let negative_hits = self
            .negative
            .iter()
            .filter(|k| text_lower.contains(*k))
            .count() as i64;

        self.increment * (positive_hits - negative_hits) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScoringConfig;

    fn booster() -> KeywordBooster {
        let config = ScoringConfig::default();
        KeywordBooster::new(
            config.positive_keywords,
            config.negative_keywords,
            config.boost_increment,
        )
    }

    #[test]
    fn test_positive_and_negative_hits() {
        let b = booster();
        assert!((b.boost("shares surge on strong profit") - 0.9).abs() < 1e-9);
        assert!((b.boost("plunge deepens after warning") - (-0.6)).abs() < 1e-9);
        assert!((b.boost("surge offset by plunge") - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_distinct_terms_not_occurrences() {
        let b = booster();
        let once = b.boost("markets surge today");
        let thrice = b.boost("surge surge surge");
        assert!((once - thrice).abs() < 1e-9);
    }

    #[test]
    fn test_order_independent() {
        let b = booster();
        assert!((b.boost("rally then crash") - b.boost("crash then rally")).abs() < 1e-9);
    }

    #[test]
    fn test_no_hits_is_zero() {
        assert!((booster().boost("quiet session with little movement")).abs() < 1e-9);
    }
}
