use crate::error::Result;
use crate::models::{Language, LengthTier, SummaryStyle};
use crate::prompt::PromptCatalog;

/// Compose the completion request payload. Pure; the article text is
/// expected to be truncated by the caller already.
pub fn build_prompt(
    catalog: &PromptCatalog,
    article_text: &str,
    style: SummaryStyle,
    language: Language,
    length: LengthTier,
) -> Result<String> {
    let instruction = catalog.style_instruction(style, language)?;
    let modifier = catalog.length_modifier(length)?;
    Ok(format!("{}{}\n\n{}", instruction, modifier, article_text))
}

/// First `max` characters of `text`, cut on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
