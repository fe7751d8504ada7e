//! Charm-style CLI prompts using cliclack

use crate::answers::AnswerPreset;
use crate::config::{GeneratorConfig, MediaRoot};
use crate::media::{self, file_name};
use crate::prompt::{configure, PresetPrompter, PromptError, Prompter, Question, CANCEL_OPTION};
use crate::{assets, output};
use anyhow::{Context, Result};
use std::io;
use std::path::PathBuf;

/// CLI arguments for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Directory to scan (defaults to the executable's directory)
    pub media_dir: Option<PathBuf>,

    /// Answer the questions from this preset file instead of prompting
    pub answers: Option<PathBuf>,

    /// Write the chosen answers to this preset file
    pub save_answers: Option<PathBuf>,

    /// Accept every default without prompting (non-interactive mode)
    pub yes: bool,

    /// Open the generated page afterwards
    pub open: bool,
}

impl GenerateArgs {
    fn is_interactive(&self) -> bool {
        self.answers.is_none() && !self.yes
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Page written to this path
    Written(PathBuf),
    /// Nothing to put in a playlist
    NoMedia,
    /// The operator backed out
    Cancelled,
}

/// Prompter backed by cliclack widgets
#[derive(Debug, Clone, Copy, Default)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn ask(&mut self, question: Question, default: bool) -> Result<String, PromptError> {
        let hint = if default { "Y/n" } else { "y/N" };
        cliclack::input(question.text())
            .placeholder(hint)
            .required(false)
            .interact()
            .map_err(from_cliclack)
    }

    fn reject(&mut self, _question: Question, input: &str) -> Result<(), PromptError> {
        cliclack::log::warning(format!(
            "'{}' is not a valid answer, use one of: y, yes, n, no",
            input.trim()
        ))?;
        Ok(())
    }

    fn select_transition(&mut self, media_files: &[String]) -> Result<Option<String>, PromptError> {
        // indices as values so files with the same name stay distinct
        let mut select = cliclack::select("Select your transition video");
        for (idx, path) in media_files.iter().enumerate() {
            let name = file_name(path);
            let hint = if name == path { "" } else { path.as_str() };
            select = select.item(Some(idx), name, hint);
        }
        select = select.item(None, CANCEL_OPTION, "");

        let picked: Option<usize> = select.interact().map_err(from_cliclack)?;
        Ok(picked.and_then(|idx| media_files.get(idx).cloned()))
    }
}

/// cliclack reports Esc / Ctrl+C as an interrupted read
fn from_cliclack(err: io::Error) -> PromptError {
    if err.kind() == io::ErrorKind::Interrupted {
        PromptError::Cancelled
    } else {
        PromptError::Io(err)
    }
}

/// Run the generator with interactive prompts
pub async fn run(config: &GeneratorConfig, args: GenerateArgs) -> Result<Outcome> {
    cliclack::intro("OBS Random Videos")?;

    // Step 1: Resolve and scan the media directory
    let root = MediaRoot::resolve(args.media_dir.as_deref())?;
    let scan = media::scan(root.path(), &config.extensions)?;

    if !scan.problematic.is_empty() {
        cliclack::log::warning(media::problematic_warning(&scan.problematic))?;
    }

    if scan.is_empty() {
        cliclack::outro(format!("No media files found in: {}", root.path().display()))?;
        if args.is_interactive() {
            wait_for_enter()?;
        }
        return Ok(Outcome::NoMedia);
    }

    cliclack::log::info(format!(
        "Found {} media files in {}",
        scan.files.len(),
        root.path().display()
    ))?;

    // Step 2: Ask the questions (or replay them)
    let mut prompter = select_prompter(&args)?;
    let answers = match configure(prompter.as_mut(), scan.files) {
        Ok(answers) => answers,
        Err(PromptError::Cancelled) => {
            cliclack::outro_cancel("Operation cancelled by user")?;
            return Ok(Outcome::Cancelled);
        }
        Err(e) => return Err(e).context("Failed to get user input"),
    };

    if let Some(path) = &args.save_answers {
        answers.to_preset().save(path)?;
        cliclack::log::info(format!("Saved answers to {}", path.display()))?;
    }

    // Step 3: Render and write the page
    let html = assets::default_renderer()
        .render(&answers)
        .context("Failed compiling template")?;

    let output_path = config.output_path(root.path());
    output::write_page(&output_path, &html).await?;
    cliclack::log::success(format!("Created {}", output_path.display()))?;

    if args.open {
        output::open_page(&output_path)?;
    }

    cliclack::outro("Add the page to OBS as a local-file browser source")?;

    Ok(Outcome::Written(output_path))
}

fn select_prompter(args: &GenerateArgs) -> Result<Box<dyn Prompter>> {
    if let Some(path) = &args.answers {
        let preset = AnswerPreset::load(path)?;
        cliclack::log::info(format!("Using answers from {}", path.display()))?;
        return Ok(Box::new(PresetPrompter::new(preset)));
    }

    if args.yes {
        cliclack::log::info("Using default answers (--yes mode)")?;
        return Ok(Box::new(PresetPrompter::defaults()));
    }

    Ok(Box::new(CliclackPrompter))
}

/// Keep a double-clicked console window open until the operator has read it
fn wait_for_enter() -> Result<()> {
    let term = console::Term::stdout();
    term.write_line("Press enter to exit...")?;
    term.read_line()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_maps_to_cancelled() {
        let err = from_cliclack(io::Error::new(io::ErrorKind::Interrupted, "esc"));
        assert!(matches!(err, PromptError::Cancelled));

        let err = from_cliclack(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(matches!(err, PromptError::Io(_)));
    }

    #[test]
    fn test_interactive_only_without_presets() {
        assert!(GenerateArgs::default().is_interactive());
        assert!(!GenerateArgs {
            yes: true,
            ..GenerateArgs::default()
        }
        .is_interactive());
        assert!(!GenerateArgs {
            answers: Some(PathBuf::from("answers.yaml")),
            ..GenerateArgs::default()
        }
        .is_interactive());
    }
}
