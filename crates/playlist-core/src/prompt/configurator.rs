//! Question flow
//!
//! ```text
//! play only one? --no--> loop first? --> transition? --yes--> select --> done
//!       |                                     `---no---------------> done
//!       `--yes--------------------------------------------------------> done
//! ```

use super::{PromptError, Prompter, Question};
use crate::answers::{Choices, UserAnswers};

/// Run the question flow over the scanned media and seal the answers.
///
/// The transition video (if any) is already removed from the returned media
/// list; the hash key covers the list as scanned.
pub fn configure<P: Prompter + ?Sized>(
    prompter: &mut P,
    media_files: Vec<String>,
) -> Result<UserAnswers, PromptError> {
    let mut choices = Choices::default();

    choices.play_only_one = ask_yes_no(prompter, Question::PlayOnlyOne, false)?;

    if !choices.play_only_one {
        choices.loop_first_video = ask_yes_no(prompter, Question::LoopFirstVideo, false)?;
        choices.have_transition_video =
            ask_yes_no(prompter, Question::HaveTransitionVideo, false)?;

        if choices.have_transition_video {
            choices.transition_video = select_transition(prompter, &media_files)?;
            choices.have_transition_video = choices.transition_video.is_some();
        }
    }

    Ok(UserAnswers::seal(choices, media_files))
}

/// Ask until the answer is in the accepted vocabulary
fn ask_yes_no<P: Prompter + ?Sized>(
    prompter: &mut P,
    question: Question,
    default: bool,
) -> Result<bool, PromptError> {
    loop {
        let input = prompter.ask(question, default)?;
        match parse_yes_no(&input, default) {
            Some(answer) => return Ok(answer),
            None => prompter.reject(question, &input)?,
        }
    }
}

fn select_transition<P: Prompter + ?Sized>(
    prompter: &mut P,
    media_files: &[String],
) -> Result<Option<String>, PromptError> {
    if media_files.is_empty() {
        return Ok(None);
    }

    match prompter.select_transition(media_files)? {
        Some(path) if path.is_empty() => Ok(None),
        Some(path) if media_files.contains(&path) => Ok(Some(path)),
        Some(path) => Err(PromptError::UnknownTransition(path)),
        None => Ok(None),
    }
}

/// Interpret a yes/no answer; `None` when it is not understood
pub fn parse_yes_no(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays canned answers and records what was asked
    #[derive(Default)]
    struct Scripted {
        answers: VecDeque<&'static str>,
        selection: Option<Option<String>>,
        asked: Vec<Question>,
        rejected: Vec<String>,
        selections_offered: usize,
    }

    impl Scripted {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                ..Self::default()
            }
        }

        fn selecting(mut self, choice: Option<&str>) -> Self {
            self.selection = Some(choice.map(str::to_string));
            self
        }
    }

    impl Prompter for Scripted {
        fn ask(&mut self, question: Question, _default: bool) -> Result<String, PromptError> {
            self.asked.push(question);
            self.answers
                .pop_front()
                .map(str::to_string)
                .ok_or(PromptError::Cancelled)
        }

        fn reject(&mut self, _question: Question, input: &str) -> Result<(), PromptError> {
            self.rejected.push(input.to_string());
            Ok(())
        }

        fn select_transition(
            &mut self,
            _media_files: &[String],
        ) -> Result<Option<String>, PromptError> {
            self.selections_offered += 1;
            self.selection.clone().ok_or(PromptError::Cancelled)
        }
    }

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_yes_no_vocabulary() {
        assert_eq!(parse_yes_no("y", false), Some(true));
        assert_eq!(parse_yes_no("YES", false), Some(true));
        assert_eq!(parse_yes_no(" n ", true), Some(false));
        assert_eq!(parse_yes_no("No", true), Some(false));
        assert_eq!(parse_yes_no("", true), Some(true));
        assert_eq!(parse_yes_no("   ", false), Some(false));
        assert_eq!(parse_yes_no("maybe", false), None);
        assert_eq!(parse_yes_no("yess", false), None);
    }

    #[test]
    fn test_play_only_one_skips_other_questions() {
        let mut prompter = Scripted::new(&["y"]);
        let answers = configure(&mut prompter, files(&["a.mp4", "b.mp4"])).unwrap();

        assert_eq!(prompter.asked, vec![Question::PlayOnlyOne]);
        assert_eq!(prompter.selections_offered, 0);
        assert!(answers.play_only_one());
        assert!(!answers.loop_first_video());
        assert!(!answers.have_transition_video());
        assert_eq!(answers.media_files().len(), 2);
    }

    #[test]
    fn test_full_flow_with_transition() {
        let mut prompter = Scripted::new(&["n", "yes", "y"]).selecting(Some("b.mp4"));
        let answers = configure(&mut prompter, files(&["a.mp4", "b.mp4", "c.mp4"])).unwrap();

        assert_eq!(
            prompter.asked,
            vec![
                Question::PlayOnlyOne,
                Question::LoopFirstVideo,
                Question::HaveTransitionVideo
            ]
        );
        assert!(answers.loop_first_video());
        assert!(answers.have_transition_video());
        assert_eq!(answers.transition_video(), "b.mp4");
        assert_eq!(answers.media_files(), files(&["a.mp4", "c.mp4"]).as_slice());
    }

    #[test]
    fn test_invalid_answers_are_reasked() {
        let mut prompter = Scripted::new(&["maybe", "?", "n", "", "nope", "n"]);
        let answers = configure(&mut prompter, files(&["a.mp4"])).unwrap();

        assert_eq!(prompter.rejected, vec!["maybe", "?", "nope"]);
        assert_eq!(
            prompter.asked,
            vec![
                Question::PlayOnlyOne,
                Question::PlayOnlyOne,
                Question::PlayOnlyOne,
                Question::LoopFirstVideo,
                Question::HaveTransitionVideo,
                Question::HaveTransitionVideo,
            ]
        );
        assert!(!answers.play_only_one());
        assert!(!answers.have_transition_video());
    }

    #[test]
    fn test_cancel_selection_clears_transition() {
        let mut prompter = Scripted::new(&["n", "n", "y"]).selecting(None);
        let answers = configure(&mut prompter, files(&["a.mp4", "b.mp4"])).unwrap();

        assert_eq!(prompter.selections_offered, 1);
        assert!(!answers.have_transition_video());
        assert_eq!(answers.transition_video(), "");
        assert_eq!(answers.media_files().len(), 2);
    }

    #[test]
    fn test_empty_selection_clears_transition() {
        let mut prompter = Scripted::new(&["n", "n", "y"]).selecting(Some(""));
        let answers = configure(&mut prompter, files(&["a.mp4"])).unwrap();
        assert!(!answers.have_transition_video());
        assert_eq!(answers.media_files(), files(&["a.mp4"]).as_slice());
    }

    #[test]
    fn test_empty_media_list_skips_selection() {
        let mut prompter = Scripted::new(&["n", "n", "y"]);
        let answers = configure(&mut prompter, Vec::new()).unwrap();

        assert_eq!(prompter.selections_offered, 0);
        assert!(!answers.have_transition_video());
    }

    #[test]
    fn test_unknown_selection_is_an_error() {
        let mut prompter = Scripted::new(&["n", "n", "y"]).selecting(Some("zzz.mp4"));
        let err = configure(&mut prompter, files(&["a.mp4"])).unwrap_err();
        assert!(matches!(err, PromptError::UnknownTransition(p) if p == "zzz.mp4"));
    }

    #[test]
    fn test_cancellation_stops_the_flow() {
        let mut prompter = Scripted::new(&["n"]);
        let err = configure(&mut prompter, files(&["a.mp4"])).unwrap_err();
        assert!(matches!(err, PromptError::Cancelled));
        assert_eq!(
            prompter.asked,
            vec![Question::PlayOnlyOne, Question::LoopFirstVideo]
        );
    }
}
