use clap::ValueEnum;

/// Tone/format of the requested summary. Closed set; each entry has an
/// instruction sentence per language in the prompt catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum SummaryStyle {
    Brief,
    Professional,
    Friendly,
    Bulleted,
    Funny,
}

impl SummaryStyle {
    pub const ALL: [SummaryStyle; 5] = [
        SummaryStyle::Brief,
        SummaryStyle::Professional,
        SummaryStyle::Friendly,
        SummaryStyle::Bulleted,
        SummaryStyle::Funny,
    ];

    pub fn display_label(&self) -> &'static str {
        match self {
            SummaryStyle::Brief => "Brief",
            SummaryStyle::Professional => "Professional",
            SummaryStyle::Friendly => "Friendly",
            SummaryStyle::Bulleted => "Bullet points",
            SummaryStyle::Funny => "Funny",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    Vietnamese,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Vietnamese, Language::English];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum LengthTier {
    Brief,
    Moderate,
    Detailed,
}

impl LengthTier {
    pub const ALL: [LengthTier; 3] =
        [LengthTier::Brief, LengthTier::Moderate, LengthTier::Detailed];
}

/// One user submission: a URL plus the selections that shape the prompt.
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub url: String,
    pub style: SummaryStyle,
    pub language: Language,
    pub length: LengthTier,
}
