//! Playlist Core - builds a randomized media playlist page for OBS
//!
//! The library scans a directory for audio and video files, asks a few
//! questions about playback, and renders a self-contained HTML page whose
//! script shuffles through the media. OBS loads that page as a browser source.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions for classification, scanning,
//!   hashing and rendering
//! - **Layer 2: Workflow** - The [`prompt::Prompter`] trait and the question flow
//!   in [`prompt::configure`], usable with any front-end
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use playlist_core::{assets, media, prompt, GeneratorConfig};
//!
//! let config = GeneratorConfig::default();
//! let scan = media::scan(root, &config.extensions)?;
//! let answers = prompt::configure(&mut prompt::PresetPrompter::defaults(), scan.files)?;
//! let html = assets::default_renderer().render(&answers)?;
//! ```

pub mod answers;
pub mod assets;
pub mod config;
pub mod media;
pub mod output;
pub mod prompt;
pub mod render;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{AnswerPreset, Choices, UserAnswers};
pub use config::{ExtensionSet, GeneratorConfig, MediaRoot};
pub use media::{scan, MediaScan};
pub use prompt::{configure, PromptError, Prompter};
pub use render::{RenderError, Renderer, Scripts};

#[cfg(feature = "tui")]
pub use tui::run;
