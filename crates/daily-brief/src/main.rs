use std::time::Duration;

use anyhow::Result;

use finbert_client::FinbertClient;
use lexicon_model::LexiconModel;
use newsapi_client::NewsApiClient;
use pulse_core::SentimentClassifier;
use sentiment_pipeline::{ArticleAggregator, ScoringConfig};
use telegram_notifier::{NotificationChannel, TelegramNotifier};
use trend_tracker::{TrendStore, TrendTracker};

mod config;
mod report;

use config::{BriefConfig, ClassifierKind};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    tracing::info!("Starting daily market brief");

    let config = BriefConfig::from_env()?;

    // One explicitly constructed classifier per process, reused across the
    // batch. No module-level model state.
    let classifier: Box<dyn SentimentClassifier> = match config.classifier {
        ClassifierKind::Remote => Box::new(FinbertClient::new(
            config.hf_endpoint.clone(),
            config.hf_api_key.clone(),
            Duration::from_secs(30),
        )),
        ClassifierKind::Local => Box::new(LexiconModel::new()),
    };
    tracing::info!(classifier = classifier.name(), "classifier ready");

    let news = NewsApiClient::new(config.newsapi_key.clone(), config.page_size);
    let notifier =
        TelegramNotifier::new(config.telegram_bot_token.clone(), config.telegram_chat_id.clone())?;
    let scoring = ScoringConfig::default();
    let aggregator = ArticleAggregator::new(&scoring);
    let tracker = TrendTracker::new(TrendStore::new(&config.trend_file));

    let articles = news.top_headlines().await?;

    if articles.is_empty() {
        if scoring.record_empty_days {
            tracker.update_today(0)?;
        }
        notifier.send(report::NO_FRESH_NEWS).await?;
        tracing::info!("empty feed, neutral day recorded");
        return Ok(());
    }

    let batch = aggregator.run(classifier.as_ref(), &articles).await?;
    tracing::info!(
        received = articles.len(),
        considered = batch.considered_count(),
        "batch processed"
    );

    // The trend write comes before delivery: losing trend state is not
    // recoverable, a missed message is.
    let trend = match (&batch.summary, scoring.record_empty_days) {
        (Some(summary), _) => Some(tracker.update_today(summary.today_sentiment)?),
        (None, true) => Some(tracker.update_today(0)?),
        (None, false) => None,
    };

    let message = match (&batch.summary, trend) {
        (Some(_), Some(trend)) => report::render_report(&batch, trend),
        _ => report::NO_RELEVANT_NEWS.to_string(),
    };

    notifier.send(&message).await?;
    tracing::info!("daily brief delivered");

    Ok(())
}
