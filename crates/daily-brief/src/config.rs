use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Which classifier variant the run constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierKind {
    /// Hosted FinBERT endpoint; degrades to neutral while the model warms up.
    Remote,
    /// In-process lexicon model; failures propagate.
    Local,
}

/// Runtime configuration, loaded once from the environment.
#[derive(Debug, Clone)]
pub struct BriefConfig {
    pub newsapi_key: String,
    pub hf_api_key: String,
    pub hf_endpoint: String,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub classifier: ClassifierKind,
    pub page_size: u32,
    pub trend_file: PathBuf,
}

impl BriefConfig {
    pub fn from_env() -> Result<Self> {
        let newsapi_key =
            std::env::var("NEWSAPI_KEY").context("NEWSAPI_KEY is required")?;
        let telegram_bot_token =
            std::env::var("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN is required")?;
        let telegram_chat_id =
            std::env::var("TELEGRAM_CHAT_ID").context("TELEGRAM_CHAT_ID is required")?;

        let classifier = match std::env::var("SENTIMENT_CLASSIFIER")
            .unwrap_or_else(|_| "remote".to_string())
            .to_lowercase()
            .as_str()
        {
            "remote" => ClassifierKind::Remote,
            "local" => ClassifierKind::Local,
            other => bail!("SENTIMENT_CLASSIFIER must be 'remote' or 'local', got {other:?}"),
        };

        let hf_api_key = std::env::var("HF_API_KEY").unwrap_or_default();
        if classifier == ClassifierKind::Remote && hf_api_key.is_empty() {
            bail!("HF_API_KEY is required for the remote classifier");
        }

        let hf_endpoint = std::env::var("HF_ENDPOINT")
            .unwrap_or_else(|_| finbert_client::DEFAULT_ENDPOINT.to_string());

        let page_size: u32 = std::env::var("NEWS_PAGE_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .context("NEWS_PAGE_SIZE must be an integer")?;
        if page_size == 0 || page_size > 100 {
            bail!("NEWS_PAGE_SIZE must be between 1 and 100, got {page_size}");
        }

        let trend_file = std::env::var("TREND_FILE")
            .unwrap_or_else(|_| "sentiment_trend.json".to_string())
            .into();

        Ok(Self {
            newsapi_key,
            hf_api_key,
            hf_endpoint,
            telegram_bot_token,
            telegram_chat_id,
            classifier,
            page_size,
            trend_file,
        })
    }
}
