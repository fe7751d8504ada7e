//! Operator answers and their fingerprint
//!
//! [`Choices`] is the draft the configurator fills in one question at a time.
//! Sealing it with [`UserAnswers::seal`] computes the hash key and drops the
//! transition video from the rotation; the result is read-only.

pub mod hash;
pub mod preset;

pub use hash::compute_hash_key;
pub use preset::AnswerPreset;

/// Answers collected so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choices {
    pub play_only_one: bool,
    pub loop_first_video: bool,
    pub have_transition_video: bool,
    pub transition_video: Option<String>,
}

/// Final, immutable answers consumed by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAnswers {
    media_files: Vec<String>,
    play_only_one: bool,
    loop_first_video: bool,
    have_transition_video: bool,
    transition_video: String,
    hash_key: String,
}

impl UserAnswers {
    /// Freeze the choices against the scanned media list.
    ///
    /// The hash covers the full list (transition video included); the stored
    /// media list has the transition video removed.
    pub fn seal(choices: Choices, media_files: Vec<String>) -> Self {
        let hash_key = compute_hash_key(&choices, &media_files);
        let transition_video = choices.transition_video.unwrap_or_default();

        let media_files = if transition_video.is_empty() {
            media_files
        } else {
            remove_transition_video(&transition_video, &media_files)
        };

        Self {
            media_files,
            play_only_one: choices.play_only_one,
            loop_first_video: choices.loop_first_video,
            have_transition_video: choices.have_transition_video,
            transition_video,
            hash_key,
        }
    }

    pub fn media_files(&self) -> &[String] {
        &self.media_files
    }

    pub fn play_only_one(&self) -> bool {
        self.play_only_one
    }

    pub fn loop_first_video(&self) -> bool {
        self.loop_first_video
    }

    pub fn have_transition_video(&self) -> bool {
        self.have_transition_video
    }

    /// Transition video path, empty when none was chosen
    pub fn transition_video(&self) -> &str {
        &self.transition_video
    }

    pub fn hash_key(&self) -> &str {
        &self.hash_key
    }

    /// The choices these answers were sealed from, as a replayable preset
    pub fn to_preset(&self) -> AnswerPreset {
        AnswerPreset {
            play_only_one: Some(self.play_only_one),
            loop_first_video: Some(self.loop_first_video),
            transition_video: if self.transition_video.is_empty() {
                None
            } else {
                Some(self.transition_video.clone())
            },
        }
    }
}

/// Remove every occurrence of `transition_video`, keeping the order of the rest
pub fn remove_transition_video(transition_video: &str, media_files: &[String]) -> Vec<String> {
    media_files
        .iter()
        .filter(|file| file.as_str() != transition_video)
        .cloned()
        .collect()
}
