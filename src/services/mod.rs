mod article_fetcher;
mod validator;

pub use article_fetcher::{extract_paragraphs, ArticleFetcher};
pub use validator::is_valid_url;
