/// Decides whether article text concerns financial markets at all.
///
/// Case-insensitive substring match against a fixed keyword list; no
/// tokenization or stemming.
#[derive(Debug, Clone)]
pub struct RelevanceFilter {
    keywords: Vec<&'static str>,
}

impl RelevanceFilter {
    pub fn new(keywords: Vec<&'static str>) -> Self {
        Self { keywords }
    }

    pub fn is_relevant(&self, text: &str) -> bool {
        let text_lower = text.to_lowercase();
        self.keywords.iter().any(|k| text_lower.contains(k))
    }
}
