//! Prompt construction for the summarization request.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Target length of the generated summary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    /// All options in selector order.
    pub const ALL: [SummaryLength; 3] = [Self::Short, Self::Medium, Self::Long];

    /// Word-count directive embedded in the prompt.
    pub fn word_target(self) -> &'static str {
        match self {
            Self::Short => "~50 words",
            Self::Medium => "~150 words",
            Self::Long => "~300 words",
        }
    }

    /// Label shown in the length selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Short => Self::Medium,
            Self::Medium => Self::Long,
            Self::Long => Self::Short,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Short => Self::Long,
            Self::Medium => Self::Short,
            Self::Long => Self::Medium,
        }
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        };
        f.write_str(name)
    }
}

impl FromStr for SummaryLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(format!(
                "unknown summary length '{}' (expected short, medium or long)",
                other
            )),
        }
    }
}

/// Build the instruction sent to the model.
///
/// The article is embedded verbatim between the length directive and the
/// trailing `Summary:` cue.
pub fn build_prompt(text: &str, length: SummaryLength) -> String {
    format!(
        "Write a concise abstractive summary of the following article in {target}. \
Use your own words and keep the key facts. Output only the summary, no preamble.\n\n\
Article:\n{text}\n\nSummary:",
        target = length.word_target(),
        text = text,
    )
}
