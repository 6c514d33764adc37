use std::collections::HashMap;

use crate::error::{AppError, Result};
use crate::models::{Language, LengthTier, SummaryStyle};

/// Instruction sentences for every style/language pair, plus a length
/// suffix per tier. Built once at startup and never mutated.
pub struct PromptCatalog {
    styles: HashMap<(SummaryStyle, Language), &'static str>,
    lengths: HashMap<LengthTier, &'static str>,
}

impl PromptCatalog {
    pub fn new() -> Self {
        let mut styles = HashMap::new();

        styles.insert(
            (SummaryStyle::Brief, Language::Vietnamese),
            "Vui lòng tóm tắt bài báo dưới đây thành một đoạn văn ngắn bằng tiếng Việt.",
        );
        styles.insert(
            (SummaryStyle::Brief, Language::English),
            "Please summarize the article below in one short paragraph in English.",
        );

        styles.insert(
            (SummaryStyle::Professional, Language::Vietnamese),
            "Hãy tóm tắt bài báo dưới đây bằng tiếng Việt với văn phong trang trọng, chuyên nghiệp.",
        );
        styles.insert(
            (SummaryStyle::Professional, Language::English),
            "Summarize the article below in English using a formal, professional tone.",
        );

        styles.insert(
            (SummaryStyle::Friendly, Language::Vietnamese),
            "Hãy tóm tắt bài báo dưới đây bằng tiếng Việt với giọng văn thân thiện, gần gũi.",
        );
        styles.insert(
            (SummaryStyle::Friendly, Language::English),
            "Summarize the article below in English in a warm, conversational tone.",
        );

        styles.insert(
            (SummaryStyle::Bulleted, Language::Vietnamese),
            "Hãy tóm tắt bài báo dưới đây thành các gạch đầu dòng ngắn gọn bằng tiếng Việt.",
        );
        styles.insert(
            (SummaryStyle::Bulleted, Language::English),
            "Summarize the article below as a list of concise bullet points in English.",
        );

        styles.insert(
            (SummaryStyle::Funny, Language::Vietnamese),
            "Hãy tóm tắt bài báo dưới đây bằng tiếng Việt với giọng điệu hài hước, dí dỏm.",
        );
        styles.insert(
            (SummaryStyle::Funny, Language::English),
            "Summarize the article below in English with a humorous, playful tone.",
        );

        let mut lengths = HashMap::new();
        lengths.insert(LengthTier::Brief, " Keep the summary very short.");
        lengths.insert(
            LengthTier::Moderate,
            " Keep the summary to a moderate length, covering the key points.",
        );
        lengths.insert(
            LengthTier::Detailed,
            " Provide a detailed summary covering all major points and conclusions.",
        );

        Self { styles, lengths }
    }

    /// Lookup failures should not happen with the closed selection set,
    /// but a missing entry must surface as an error rather than a panic.
    pub fn style_instruction(
        &self,
        style: SummaryStyle,
        language: Language,
    ) -> Result<&'static str> {
        self.styles
            .get(&(style, language))
            .copied()
            .ok_or_else(|| AppError::PromptLookup(format!("{:?}/{:?}", style, language)))
    }

    pub fn length_modifier(&self, tier: LengthTier) -> Result<&'static str> {
        self.lengths
            .get(&tier)
            .copied()
            .ok_or_else(|| AppError::PromptLookup(format!("{:?}", tier)))
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_selection() {
        let catalog = PromptCatalog::new();
        for style in SummaryStyle::ALL {
            for language in Language::ALL {
                assert!(catalog.style_instruction(style, language).is_ok());
            }
        }
        for tier in LengthTier::ALL {
            assert!(catalog.length_modifier(tier).is_ok());
        }
    }

    #[test]
    fn brief_vietnamese_matches_reference_sentence() {
        let catalog = PromptCatalog::new();
        let sentence = catalog
            .style_instruction(SummaryStyle::Brief, Language::Vietnamese)
            .unwrap();
        assert!(sentence.contains("tóm tắt"));
        assert!(sentence.contains("tiếng Việt"));
    }
}
