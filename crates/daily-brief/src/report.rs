use pulse_core::{BatchReport, TrendDirection};

/// Fixed message when the feed itself came back empty.
pub const NO_FRESH_NEWS: &str = "No fresh business news today.";

/// Fixed message when nothing in the batch was market-relevant.
pub const NO_RELEVANT_NEWS: &str = "No market-relevant news today.";

const FOOTER: &str = "<i>Not direct trading advice.</i>";

/// Minimal HTML escaping for Telegram's HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the full daily brief.
///
/// Articles keep their input order; numbering is 1-based over the
/// considered articles only, so filtered items never leave gaps. Callers
/// must use [`NO_RELEVANT_NEWS`] instead when the report has no summary.
pub fn render_report(report: &BatchReport, trend: TrendDirection) -> String {
    let mut message = String::from("<b>Global Market Pulse</b>\n\n");

    let mut number = 0usize;
    for record in report.records.iter().filter(|r| r.relevant) {
        number += 1;

        let sentiment_line = match &record.classification {
            Some(c) => format!("Sentiment: {} ({:.2})", c.label.to_label(), c.confidence),
            None => "Sentiment: unavailable".to_string(),
        };

        message.push_str(&format!(
            "{number}. <b>{}</b>\n{sentiment_line}\n{}\n{}\n{}\n\n",
            escape_html(&record.article.title),
            escape_html(&record.article.description),
            record.insight,
            record.article.url,
        ));
    }

    if let Some(summary) = &report.summary {
        message.push_str(&format!(
            "<b>────────────────────────</b>\n\
             <b>Market Summary</b>\n\
             Today's Bias: <b>{}</b>\n\
             Aggregate Score: {:.2}\n\n\
             {}\n\n\
             {FOOTER}",
            summary.direction.to_label(),
            summary.total_score,
            trend.to_label(),
        ));
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::{
        Article, ArticleRecord, BatchSummary, Classification, Direction, SentimentLabel,
    };

    fn record(title: &str, relevant: bool, score: f64) -> ArticleRecord {
        ArticleRecord {
            article: Article {
                title: title.to_string(),
                description: "desc".to_string(),
                url: "https://example.com".to_string(),
            },
            relevant,
            classification: relevant
                .then(|| Classification::new(SentimentLabel::Positive, 0.8)),
            final_score: score,
            direction: Direction::from_score(score, 0.3),
            insight: if relevant {
                "Sentiment supports short-term risk appetite.".to_string()
            } else {
                String::new()
            },
        }
    }

    fn sample_report() -> BatchReport {
        BatchReport {
            records: vec![
                record("Irrelevant piece", false, 0.0),
                record("Stocks & bonds rally", true, 0.8),
                record("Fed <watch> update", true, 0.4),
            ],
            summary: Some(BatchSummary {
                considered: 2,
                total_score: 1.2,
                average_score: 0.6,
                direction: Direction::Up,
                today_sentiment: 1,
            }),
        }
    }

    #[test]
    fn test_numbering_skips_filtered_articles() {
        let message = render_report(&sample_report(), TrendDirection::Improving);
        assert!(message.contains("1. <b>Stocks &amp; bonds rally</b>"));
        assert!(message.contains("2. <b>Fed &lt;watch&gt; update</b>"));
        assert!(!message.contains("Irrelevant piece"));
        assert!(!message.contains("3. "));
    }

    #[test]
    fn test_html_escaping() {
        assert_eq!(escape_html("a & b < c > d"), "a &amp; b &lt; c &gt; d");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_summary_block_contents() {
        let message = render_report(&sample_report(), TrendDirection::Improving);
        assert!(message.contains("Today's Bias: <b>Positive Bias</b>"));
        assert!(message.contains("Aggregate Score: 1.20"));
        assert!(message.contains("Trend: sentiment improving"));
        assert!(message.contains(FOOTER));
    }

    #[test]
    fn test_sentiment_line_has_confidence() {
        let message = render_report(&sample_report(), TrendDirection::Stable);
        assert!(message.contains("Sentiment: Positive (0.80)"));
    }

    #[test]
    fn test_fixed_messages_are_distinct() {
        assert_ne!(NO_FRESH_NEWS, NO_RELEVANT_NEWS);
    }
}
