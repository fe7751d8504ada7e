//! OBS Random Videos - builds a shuffling media page for OBS browser sources

use anyhow::Result;
use clap::{Parser, Subcommand};
use playlist_core::config::{GeneratorConfig, MediaRoot};
use playlist_core::tui::GenerateArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "obs-random-videos")]
#[command(about = "Build a page that plays the media next to it in random order")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask the playback questions and write the page (default)
    Generate(CliGenerateArgs),
    /// List the media files that would be used, without prompting or writing
    Scan(ScanArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CliGenerateArgs {
    /// Directory to scan; the page is written there too [default: the executable's directory]
    #[arg(short, long = "dir")]
    pub dir: Option<PathBuf>,

    /// File name of the generated page
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Answer the questions from a YAML preset instead of prompting
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Save the chosen answers as a YAML preset
    #[arg(long = "save-answers")]
    pub save_answers: Option<PathBuf>,

    /// Accept every default answer (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Open the generated page when done
    #[arg(long)]
    pub open: bool,
}

impl From<CliGenerateArgs> for GenerateArgs {
    fn from(args: CliGenerateArgs) -> Self {
        GenerateArgs {
            media_dir: args.dir,
            answers: args.answers,
            save_answers: args.save_answers,
            yes: args.yes,
            open: args.open,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Directory to scan [default: the executable's directory]
    #[arg(short, long = "dir")]
    pub dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    match args.command {
        Some(Command::Scan(scan_args)) => {
            let config = GeneratorConfig::default();
            let root = MediaRoot::resolve(scan_args.dir.as_deref())?;
            playlist_core::media::print_scan_report(root.path(), &config)?;
            Ok(())
        }
        Some(Command::Generate(generate_args)) => generate(generate_args).await,
        // No subcommand provided, default to generate behavior (interactive mode)
        None => generate(CliGenerateArgs::default()).await,
    }
}

async fn generate(args: CliGenerateArgs) -> Result<()> {
    let mut config = GeneratorConfig::default();
    if let Some(output) = &args.output {
        config.output_name = output.clone();
    }

    let result = playlist_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result.map(|_| ())
}
