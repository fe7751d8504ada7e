//! Prompter that answers from a preset instead of the terminal

use super::{PromptError, Prompter, Question};
use crate::answers::preset::find_media;
use crate::answers::AnswerPreset;

/// Answers every question from an [`AnswerPreset`].
///
/// Unset answers take the question's default; an unset transition video
/// picks the cancel entry.
#[derive(Debug, Clone, Default)]
pub struct PresetPrompter {
    preset: AnswerPreset,
}

impl PresetPrompter {
    pub fn new(preset: AnswerPreset) -> Self {
        Self { preset }
    }

    /// Accept every default (the `--yes` mode)
    pub fn defaults() -> Self {
        Self::default()
    }
}

impl Prompter for PresetPrompter {
    fn ask(&mut self, question: Question, _default: bool) -> Result<String, PromptError> {
        let answer = match question {
            Question::PlayOnlyOne => self.preset.play_only_one,
            Question::LoopFirstVideo => self.preset.loop_first_video,
            Question::HaveTransitionVideo => Some(self.preset.transition_video.is_some()),
        };

        Ok(match answer {
            Some(true) => "yes".to_string(),
            Some(false) => "no".to_string(),
            None => String::new(),
        })
    }

    fn reject(&mut self, question: Question, input: &str) -> Result<(), PromptError> {
        // re-asking a preset returns the same answer forever
        Err(PromptError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Unusable preset answer '{}' for: {}", input, question.text()),
        )))
    }

    fn select_transition(&mut self, media_files: &[String]) -> Result<Option<String>, PromptError> {
        match &self.preset.transition_video {
            Some(wanted) => find_media(wanted, media_files)
                .cloned()
                .map(Some)
                .ok_or_else(|| PromptError::UnknownTransition(wanted.clone())),
            None => Ok(None),
        }
    }
}
