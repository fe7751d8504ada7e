//! Page rendering
//!
//! Rendering runs two passes over the template:
//! 1. Script injection: `{{ MainScript }}` and `{{ BodyScript }}` are replaced
//!    with the script sources verbatim.
//! 2. Answer injection: the answer slots (now also present inside the
//!    injected scripts) are replaced with escaped script literals.
//!
//! Either pass failing fails the whole render.

pub mod escape;
pub mod slots;

use crate::answers::UserAnswers;
use thiserror::Error;

pub use slots::{Pass, Slot};

/// Comment prepended to every generated page
pub const BANNER: &str = "<!--\nOBS Random Videos\nAUTO GENERATED FILE\nDON'T TOUCH\n-->\n";

/// Separator between entries of the media array literal
pub const LIST_SEPARATOR: &str = ", ";

/// Render failures
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unknown slot '{name}' during {pass}")]
    UnknownSlot { pass: Pass, name: String },

    #[error("Malformed slot '{{{{{text}}}}}' at byte {offset} during {pass}")]
    MalformedSlot {
        pass: Pass,
        offset: usize,
        text: String,
    },

    #[error("Unterminated slot at byte {offset} during {pass}")]
    Unterminated { pass: Pass, offset: usize },

    #[error("Failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Script sources injected in the first pass
#[derive(Debug, Clone, Default)]
pub struct Scripts {
    pub main_script: String,
    pub body_script: String,
}

/// Renders the page template for a set of answers
#[derive(Debug, Clone)]
pub struct Renderer {
    template: String,
    scripts: Scripts,
}

impl Renderer {
    pub fn new(template: impl Into<String>, scripts: Scripts) -> Self {
        Self {
            template: template.into(),
            scripts,
        }
    }

    /// Produce the final page text
    pub fn render(&self, answers: &UserAnswers) -> Result<String, RenderError> {
        let with_scripts = self.inject_scripts()?;
        inject_answers(&with_scripts, answers)
    }

    /// First pass: banner plus verbatim script sources
    pub fn inject_scripts(&self) -> Result<String, RenderError> {
        let template = format!("{}{}", BANNER, self.template);
        slots::substitute(&template, Pass::Scripts, |slot| match slot {
            Slot::MainScript => slots::Resolution::Replace(&self.scripts.main_script),
            Slot::BodyScript => slots::Resolution::Replace(&self.scripts.body_script),
            _ => slots::Resolution::Keep,
        })
    }
}

/// Script-literal text for each answer slot
struct AnswerValues {
    media_files: String,
    play_only_one: &'static str,
    loop_first_video: &'static str,
    have_transition_video: &'static str,
    transition_video: String,
    hash_key: String,
}

impl AnswerValues {
    fn new(answers: &UserAnswers) -> Result<Self, RenderError> {
        Ok(Self {
            media_files: escape::path_array_literal(answers.media_files(), LIST_SEPARATOR)?,
            play_only_one: bool_literal(answers.play_only_one()),
            loop_first_video: bool_literal(answers.loop_first_video()),
            have_transition_video: bool_literal(answers.have_transition_video()),
            transition_video: escape::string_literal(&escape::encode_path(
                answers.transition_video(),
            ))?,
            hash_key: escape::string_literal(answers.hash_key())?,
        })
    }

    fn get(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::MediaFiles => Some(&self.media_files),
            Slot::PlayOnlyOne => Some(self.play_only_one),
            Slot::LoopFirstVideo => Some(self.loop_first_video),
            Slot::HaveTransitionVideo => Some(self.have_transition_video),
            Slot::TransitionVideo => Some(&self.transition_video),
            Slot::HashKey => Some(&self.hash_key),
            Slot::MainScript | Slot::BodyScript => None,
        }
    }
}

fn bool_literal(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Second pass: answer slots become script literals
pub fn inject_answers(text: &str, answers: &UserAnswers) -> Result<String, RenderError> {
    let values = AnswerValues::new(answers)?;

    // script slots are not valid once the scripts are in place
    let mut leftover = None;
    let out = slots::substitute(text, Pass::Answers, |slot| match values.get(slot) {
        Some(value) => slots::Resolution::Replace(value),
        None => {
            leftover.get_or_insert(slot);
            slots::Resolution::Keep
        }
    })?;

    match leftover {
        Some(slot) => Err(RenderError::UnknownSlot {
            pass: Pass::Answers,
            name: slot.name().to_string(),
        }),
        None => Ok(out),
    }
}
