mod catalog;
mod composer;

pub use catalog::PromptCatalog;
pub use composer::{build_prompt, truncate_chars};
