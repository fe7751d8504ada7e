//! Media discovery
//!
//! This module provides:
//! - File classification by extension and URL-hazard characters
//! - The recursive directory scan producing the playlist candidates
//! - A plain (non-prompting) report of a scan for the `scan` subcommand

pub mod classify;
pub mod scanner;

use crate::config::GeneratorConfig;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub use classify::{has_problematic_chars, is_media_file, PROBLEMATIC_CHARS};
pub use scanner::{normalize_path, scan, MediaScan};

/// Last `/`-separated component of a normalized media path
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Human-readable warning listing file names that may break playback
pub fn problematic_warning(names: &[String]) -> String {
    let mut message =
        String::from("Found files with characters that may cause playback issues:\n");
    for name in names {
        message.push_str(&format!("  • {}\n", name));
    }
    let chars: Vec<String> = PROBLEMATIC_CHARS.iter().map(char::to_string).collect();
    message.push_str(&format!("\nProblematic characters: {}\n", chars.join(" ")));
    message.push_str("Consider renaming these files to avoid potential issues.");
    message
}

/// Scan a root and print what was found without prompting or writing
pub fn print_scan_report(root: &Path, config: &GeneratorConfig) -> Result<MediaScan> {
    println!(
        "{}",
        format!("Scanning {}...", root.display()).cyan().bold()
    );
    println!();

    let result = scan(root, &config.extensions)?;

    for path in &result.files {
        let marker = if has_problematic_chars(file_name(path)) {
            "!".yellow()
        } else {
            "->".blue()
        };
        println!("  {} {}", marker, path);
    }

    if !result.problematic.is_empty() {
        println!();
        eprintln!(
            "{} {}",
            "Warning:".yellow(),
            problematic_warning(&result.problematic)
        );
    }

    println!();
    println!(
        "{} {} media file(s) in {}",
        "Found".green().bold(),
        result.files.len(),
        root.display()
    );

    Ok(result)
}
