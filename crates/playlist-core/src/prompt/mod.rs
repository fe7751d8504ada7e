//! Prompting capability and the question flow built on it
//!
//! The configurator only knows how to ask a yes/no question and how to pick
//! one media file; the terminal widgets live behind [`Prompter`].

pub mod configurator;
pub mod preset;

use thiserror::Error;

pub use configurator::{configure, parse_yes_no};
pub use preset::PresetPrompter;

/// Questions asked by the configurator, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {
    PlayOnlyOne,
    LoopFirstVideo,
    HaveTransitionVideo,
}

impl Question {
    pub fn text(&self) -> &'static str {
        match self {
            Question::PlayOnlyOne => {
                "Do you only want to play one video? (The first random video will play once and then stop)"
            }
            Question::LoopFirstVideo => "Do you want to loop the first video?",
            Question::HaveTransitionVideo => {
                "Do you have a transition video? (This video plays after every other video)"
            }
        }
    }
}

/// Label of the sentinel entry that backs out of the transition selection
pub const CANCEL_OPTION: &str = "CANCEL";

/// Prompt failures
#[derive(Debug, Error)]
pub enum PromptError {
    /// The operator aborted; the run ends without writing anything
    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Transition video '{0}' is not one of the scanned media files")]
    UnknownTransition(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Abstract prompting capability
pub trait Prompter {
    /// Ask a yes/no question and return the raw answer text.
    ///
    /// An empty string means "take the default".
    fn ask(&mut self, question: Question, default: bool) -> Result<String, PromptError>;

    /// Called when an answer was not understood, before the question is
    /// asked again
    fn reject(&mut self, _question: Question, _input: &str) -> Result<(), PromptError> {
        Ok(())
    }

    /// Pick the transition video from the media list.
    ///
    /// Returns the chosen path, or `None` when the operator picked the cancel
    /// entry.
    fn select_transition(&mut self, media_files: &[String]) -> Result<Option<String>, PromptError>;
}
