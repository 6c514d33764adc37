use std::time::Duration;

use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::error::{AppError, Result};

const USER_AGENT_STRING: &str = "Mozilla/5.0";

pub struct ArticleFetcher {
    client: Client,
}

impl ArticleFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT_STRING)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch one URL and return its concatenated paragraph text.
    pub async fn fetch_article_text(&self, article_url: &str) -> Result<String> {
        match Url::parse(article_url) {
            Ok(_) => {}
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                return Err(AppError::MissingScheme(article_url.to_string()));
            }
            Err(e) => return Err(AppError::Fetch(e.to_string())),
        }

        let response = self
            .client
            .get(article_url)
            .send()
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Fetch(format!("HTTP {}", response.status())));
        }

        let html = response
            .text()
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        extract_paragraphs(&html)
            .ok_or_else(|| AppError::EmptyArticle(article_url.to_string()))
    }
}

impl Default for ArticleFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Text content of every `<p>` element, trimmed per paragraph and
/// joined with newlines. None when nothing recoverable remains; that
/// is the only "no article content" heuristic.
pub fn extract_paragraphs(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("p").expect("p is a valid selector");

    let article = document
        .select(&selector)
        .map(|p| p.text().collect::<String>().trim().to_string())
        .collect::<Vec<_>>()
        .join("\n");

    if article.trim().is_empty() {
        None
    } else {
        Some(article)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paragraphs_with_newlines() {
        assert_eq!(
            extract_paragraphs("<html><body><p>A</p><p>B</p></body></html>"),
            Some("A\nB".to_string())
        );
    }

    #[test]
    fn trims_each_paragraph() {
        assert_eq!(
            extract_paragraphs("<p>  first  </p><p>\n second \t</p>"),
            Some("first\nsecond".to_string())
        );
    }

    #[test]
    fn collects_nested_inline_text() {
        assert_eq!(
            extract_paragraphs("<p>Giá <b>vàng</b> tăng</p>"),
            Some("Giá vàng tăng".to_string())
        );
    }

    #[test]
    fn no_paragraphs_means_no_article() {
        assert_eq!(extract_paragraphs("<div>only a div</div>"), None);
        assert_eq!(extract_paragraphs(""), None);
    }

    #[test]
    fn whitespace_only_paragraphs_mean_no_article() {
        assert_eq!(extract_paragraphs("<p>   </p><p>\n</p>"), None);
    }
}
