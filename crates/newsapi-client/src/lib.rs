use serde::Deserialize;
use std::time::Duration;

use pulse_core::{Article, PulseError, PulseResult};

const BASE_URL: &str = "https://newsapi.org/v2";

/// Client for the NewsAPI top-headlines feed.
pub struct NewsApiClient {
    api_key: String,
    client: reqwest::Client,
    page_size: u32,
}

#[derive(Debug, Deserialize)]
struct HeadlinesResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
}

impl NewsApiClient {
    pub fn new(api_key: String, page_size: u32) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key,
            client,
            page_size,
        }
    }

    /// Fetch today's top business headlines.
    ///
    /// Null fields map to empty strings and every entry is kept: an article
    /// with no title can still carry a scorable description, and entries
    /// with no text at all fall out at the relevance filter.
    pub async fn top_headlines(&self) -> PulseResult<Vec<Article>> {
        let url = format!("{}/top-headlines", BASE_URL);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("category", "business".to_string()),
                ("language", "en".to_string()),
                ("pageSize", self.page_size.to_string()),
                ("apiKey", self.api_key.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PulseError::Api(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let headlines: HeadlinesResponse = response
            .json()
            .await
            .map_err(|e| PulseError::Api(e.to_string()))?;

        let articles = into_articles(headlines.articles);

        tracing::info!(count = articles.len(), "fetched business headlines");
        Ok(articles)
    }
}

fn into_articles(raw_articles: Vec<RawArticle>) -> Vec<Article> {
    raw_articles
        .into_iter()
        .map(|raw| Article {
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
        })
        .collect()
}
