use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::ai::Summarizer;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::export;
use crate::models::{Language, LengthTier, SummaryRequest, SummaryResult, SummaryStyle};
use crate::prompt::{build_prompt, truncate_chars, PromptCatalog};
use crate::services::{is_valid_url, ArticleFetcher};

/// One batch entry: the URL as submitted plus what became of it. A
/// failed URL never disturbs its siblings.
pub struct UrlOutcome {
    pub url: String,
    pub result: Result<SummaryResult>,
}

pub struct App {
    config: Config,
    catalog: PromptCatalog,
    fetcher: ArticleFetcher,
    summarizer: Summarizer,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let api_key = config
            .openai_api_key
            .clone()
            .ok_or_else(|| {
                AppError::Config(
                    "no API key: set OPENAI_API_KEY or openai_api_key in the config file"
                        .to_string(),
                )
            })?;

        let summarizer =
            Summarizer::new(config.api_url.clone(), config.model.clone(), api_key);

        Ok(Self {
            config,
            catalog: PromptCatalog::new(),
            fetcher: ArticleFetcher::new(),
            summarizer,
        })
    }

    /// Process URLs strictly in input order, one at a time; each URL is
    /// fully fetched and summarized before the next begins.
    pub async fn process_batch(
        &self,
        urls: &[String],
        style: SummaryStyle,
        language: Language,
        length: LengthTier,
    ) -> Vec<UrlOutcome> {
        let mut outcomes = Vec::with_capacity(urls.len());

        for url in urls {
            let request = SummaryRequest {
                url: url.clone(),
                style,
                language,
                length,
            };
            let result = self.process_url(&request).await;
            if let Err(e) = &result {
                tracing::warn!("skipping {}: {}", url, e);
            }
            outcomes.push(UrlOutcome {
                url: url.clone(),
                result,
            });
        }

        outcomes
    }

    async fn process_url(&self, request: &SummaryRequest) -> Result<SummaryResult> {
        if !is_valid_url(&request.url) {
            return Err(AppError::InvalidUrl(request.url.clone()));
        }

        let article = self.fetcher.fetch_article_text(&request.url).await?;
        let article = truncate_chars(&article, self.config.max_article_chars);

        let prompt = build_prompt(
            &self.catalog,
            article,
            request.style,
            request.language,
            request.length,
        )?;

        let summary_text = self.summarizer.summarize(&prompt).await?;

        Ok(SummaryResult {
            source_url: request.url.clone(),
            summary_text,
            generated_at: Utc::now(),
        })
    }

    /// Write the `.txt` export for one summary, named with its batch
    /// index and generation timestamp.
    pub fn export_text(&self, result: &SummaryResult, index: usize, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(format!(
            "summary_{}_{}.txt",
            index + 1,
            result.generated_at.format("%Y%m%d_%H%M%S")
        ));
        std::fs::write(&path, export::to_text_buffer(&result.summary_text))?;
        Ok(path)
    }

    /// Write the `.pdf` export; the source URL doubles as the title.
    pub fn export_pdf(&self, result: &SummaryResult, index: usize, dir: &Path) -> Result<PathBuf> {
        let font_path = self.config.pdf_font_path.as_deref().map(Path::new);
        let bytes = export::to_pdf(&result.source_url, &result.summary_text, font_path)?;

        let path = dir.join(format!(
            "summary_{}_{}.pdf",
            index + 1,
            result.generated_at.format("%Y%m%d_%H%M%S")
        ));
        std::fs::write(&path, bytes)?;
        Ok(path)
    }
}
