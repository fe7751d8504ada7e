//! Media file classification

use crate::config::ExtensionSet;

/// Characters that break `file://` URL parsing when left in a file name
pub const PROBLEMATIC_CHARS: &[char] = &['#', ';', '?', ':', '@', '&', '=', '+', '$', ','];

/// Check whether a file name ends with one of the configured extensions.
///
/// Plain byte-wise suffix test: no case folding, no extension parsing.
pub fn is_media_file(name: &str, extensions: &ExtensionSet) -> bool {
    extensions.iter().any(|ext| name.ends_with(ext))
}

/// Check whether a file name contains any character that is unsafe in a
/// `file://` URL
pub fn has_problematic_chars(name: &str) -> bool {
    name.contains(PROBLEMATIC_CHARS)
}
