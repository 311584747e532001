//! Cue application binary - composition root.
//!
//! Ties the Cue crates together into a terminal teleprompter:
//! 1. Parse CLI arguments and load configuration
//! 2. Read the script (file or stdin), optionally humanize it via the
//!    text-generation service
//! 3. Segment the script into sentences
//! 4. Run the pacing engine and print each reveal until the sequence ends

mod cli;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};

use cue_core::config::CueConfig;
use cue_core::CueError;
use cue_pacing::{PacingEngine, PlaybackOptions};
use cue_script::{segment_with, SegmentStrategy};
use cue_services::{GenerationClient, PlainTextExtractor, TextExtraction};

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let config_path = args.resolve_config_path();
    let config = CueConfig::load_or_default(&config_path);

    // Tracing. RUST_LOG wins over the resolved level, matching the usual
    // escape hatch.
    let log_level = args.resolve_log_level(&config);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Cue v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!(path = %config_path.display(), "Configuration resolved");

    run(args, config).await?;
    Ok(())
}

async fn run(args: CliArgs, config: CueConfig) -> Result<(), CueError> {
    let from_file = args.script.is_some();
    let mut text = read_script(&args).await?;

    // Optional humanize pass. A collaborator failure must not stop
    // playback; the original text is used instead.
    if args.humanize {
        let client = GenerationClient::from_config(&config.generation);
        let api_key = args.resolve_api_key(&config).unwrap_or_default();
        match client.rewrite(&text, &api_key).await {
            Ok(rewritten) => {
                tracing::info!(len = rewritten.len(), "Script humanized");
                text = rewritten;
            }
            Err(e) => {
                tracing::error!(error = %e, "Humanize failed, using the original script");
                eprintln!("Humanize failed: {e}");
            }
        }
    }

    let strategy = SegmentStrategy::from_config(&config.segmenter);
    let sentences = segment_with(&text, strategy);
    if sentences.is_empty() {
        println!("Nothing to read: the script contains no sentences.");
        return Ok(());
    }

    let options = PlaybackOptions {
        speed: args.resolve_speed(&config),
        mode: args.resolve_mode(&config),
        autoplay: args.resolve_autoplay(&config),
    };
    let engine = PacingEngine::new(sentences, options);
    let total = engine.sentence_count();
    tracing::info!(
        sentences = total,
        speed = %options.speed,
        mode = %options.mode,
        "Session ready"
    );

    // Without autoplay, hold until the reader is ready. Only possible when
    // the script came from a file; stdin is already spoken for.
    if !engine.is_playing() {
        if from_file {
            println!("Press Enter to start...");
            let mut line = String::new();
            BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
        }
        engine.toggle_play();
    }

    let mut rx = engine.subscribe();
    let mut last_printed = rx.borrow().index;
    print_reveal(engine.sentences(), last_printed, total, engine.progress());

    while rx.changed().await.is_ok() {
        let snapshot = *rx.borrow();
        if snapshot.index != last_printed {
            print_reveal(engine.sentences(), snapshot.index, total, snapshot.progress);
            last_printed = snapshot.index;
        }
        if !snapshot.playing {
            break;
        }
    }

    println!("\nDone. {total} sentences revealed.");
    Ok(())
}

/// Read the raw script text from the file argument or stdin.
async fn read_script(args: &CliArgs) -> Result<String, CueError> {
    match &args.script {
        Some(path) => {
            let bytes = tokio::fs::read(path).await?;
            let text = PlainTextExtractor.extract_text(&bytes).await?;
            tracing::info!(path = %path.display(), len = text.len(), "Script loaded");
            Ok(text)
        }
        None => {
            let mut text = String::new();
            BufReader::new(tokio::io::stdin())
                .read_to_string(&mut text)
                .await?;
            tracing::info!(len = text.len(), "Script read from stdin");
            Ok(text)
        }
    }
}

fn print_reveal(sentences: &[String], index: usize, total: usize, progress: f64) {
    if let Some(sentence) = sentences.get(index) {
        println!("[{:>3}/{:<3} {:>5.1}%] {}", index + 1, total, progress, sentence);
    }
}
