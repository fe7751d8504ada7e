//! Recorded answers (YAML) for non-interactive runs

use crate::media::file_name;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Answers read from (or written to) a preset file.
///
/// Unset fields fall back to the question's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_only_one: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_first_video: Option<bool>,

    /// Media path (relative to the media root) or bare file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_video: Option<String>,
}

impl AnswerPreset {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse answers file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize answers")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// Find a media entry by exact path, falling back to a file name match
pub fn find_media<'a>(wanted: &str, media_files: &'a [String]) -> Option<&'a String> {
    media_files
        .iter()
        .find(|f| f.as_str() == wanted)
        .or_else(|| media_files.iter().find(|f| file_name(f) == wanted))
}
