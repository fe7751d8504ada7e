//! Generator configuration
//!
//! Everything the scanner and writer need to know up front lives here and is
//! passed in explicitly. Nothing in this crate reads process-wide settings
//! except [`MediaRoot::resolve`], which is called once by the front-end.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default audio extensions (dot-prefixed, lowercase)
pub const DEFAULT_AUDIO_EXTENSIONS: &[&str] = &[".mp3", ".ogg", ".aac"];

/// Default video extensions (dot-prefixed, lowercase)
pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".webm", ".mpeg4", ".m4v", ".mov"];

/// Name of the generated page, written into the media root
pub const DEFAULT_OUTPUT_NAME: &str = "obs-random-videos.html";

/// Environment variable overriding the media root
pub const MEDIA_DIR_ENV: &str = "OBS_RANDOM_VIDEOS_DIR";

/// Audio and video suffixes recognized as media
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    audio: Vec<String>,
    video: Vec<String>,
}

impl ExtensionSet {
    pub fn new<A, V>(audio: A, video: V) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            audio: audio.into_iter().map(Into::into).collect(),
            video: video.into_iter().map(Into::into).collect(),
        }
    }

    /// An extension set that matches nothing
    pub fn empty() -> Self {
        Self {
            audio: Vec::new(),
            video: Vec::new(),
        }
    }

    pub fn audio(&self) -> &[String] {
        &self.audio
    }

    pub fn video(&self) -> &[String] {
        &self.video
    }

    /// Union of audio and video suffixes, audio first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.audio.iter().chain(self.video.iter()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.audio.is_empty() && self.video.is_empty()
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new(
            DEFAULT_AUDIO_EXTENSIONS.iter().copied(),
            DEFAULT_VIDEO_EXTENSIONS.iter().copied(),
        )
    }
}

/// Immutable settings for one generator run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Suffixes classified as media
    pub extensions: ExtensionSet,

    /// File name (or path relative to the media root) of the generated page
    pub output_name: PathBuf,
}

impl GeneratorConfig {
    /// Where the page ends up for a given media root
    pub fn output_path(&self, root: &Path) -> PathBuf {
        if self.output_name.is_absolute() {
            self.output_name.clone()
        } else {
            root.join(&self.output_name)
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            extensions: ExtensionSet::default(),
            output_name: PathBuf::from(DEFAULT_OUTPUT_NAME),
        }
    }
}

/// Directory that gets scanned and receives the generated page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRoot(PathBuf);

impl MediaRoot {
    /// Resolve the media root: explicit flag, then env var, then the
    /// directory containing the running executable
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(MEDIA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let dir = match explicit.map(Path::to_path_buf).or(from_env) {
            Some(dir) => dir,
            None => {
                let exe = std::env::current_exe()
                    .context("Failed to get current executable path")?;
                exe.parent()
                    .map(Path::to_path_buf)
                    .ok_or_else(|| anyhow::anyhow!("Executable has no parent directory"))?
            }
        };

        let dir = std::path::absolute(&dir)
            .with_context(|| format!("Failed to get absolute path for {}", dir.display()))?;

        if !dir.is_dir() {
            anyhow::bail!("Media directory does not exist: {}", dir.display());
        }

        Ok(Self(dir))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for MediaRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
