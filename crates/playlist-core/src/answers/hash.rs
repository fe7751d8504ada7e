//! Answer fingerprint

use super::Choices;
use md5::{Digest, Md5};

/// Compute the hash key for a set of choices over a media list.
///
/// The page uses it to namespace its stored playlist state, so any change in
/// configuration (including media order) starts a fresh shuffle. Not used for
/// anything security related.
pub fn compute_hash_key(choices: &Choices, media_files: &[String]) -> String {
    let canonical = format!(
        "{}{}{}{}{}",
        choices.play_only_one,
        choices.loop_first_video,
        choices.have_transition_video,
        choices.transition_video.as_deref().unwrap_or(""),
        media_files.concat()
    );

    let digest = Md5::digest(canonical.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
