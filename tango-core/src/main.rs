use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::error;

use tango_core::model::config::{BuildConfig, SegmenterKind};
use tango_core::services::deck::AnkiExporter;
use tango_core::services::{pipeline, segmenter};
use tango_core::TangoError;

#[derive(Parser, Debug)]
#[command(name = "tango", about = "Convert text files into Anki cards.", version)]
struct Cli {
    /// Input path to a text file or a folder containing text files.
    #[arg(short, long, default_value = "media/GTO/GTO19draft.srt")]
    ipath: PathBuf,

    /// Lower frequency bound [default: 1]
    #[arg(short = 'f', value_parser = at_least_one)]
    lower_freq_bound: Option<usize>,

    /// Minimum number of sentences [default: 1]
    #[arg(short = 's', value_parser = at_least_one)]
    min_n_sentences: Option<usize>,

    /// JSON build configuration. Flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Deck name, also the output file name.
    #[arg(long)]
    deck_name: Option<String>,

    /// Converted frequency dictionary (.json). Its .zip is used when missing.
    #[arg(long)]
    dictionary: Option<PathBuf>,

    #[arg(long, value_enum)]
    segmenter: Option<SegmenterKind>,

    /// Vibrato system dictionary (.dic or .dic.zst).
    #[arg(long)]
    segmenter_dict: Option<PathBuf>,

    /// Sentence separator regex [default: \n]
    #[arg(long)]
    separator: Option<String>,

    /// Rarest words first.
    #[arg(long)]
    reverse: bool,

    /// Drop cue numbers, timings and tags from .srt files.
    #[arg(long)]
    clean_subtitles: bool,
}

fn at_least_one(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<BuildConfig> {
    let mut cfg = match &cli.config {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str::<BuildConfig>(&data)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => BuildConfig::default(),
    };

    if let Some(f) = cli.lower_freq_bound {
        cfg.lower_freq_bound = u32::try_from(f).context("lower frequency bound is too large")?;
    }
    if let Some(s) = cli.min_n_sentences {
        cfg.min_number_sentences = s;
    }
    if let Some(name) = &cli.deck_name {
        cfg.deck.name = name.clone();
    }
    if let Some(path) = &cli.dictionary {
        cfg.dictionary_path = path.clone();
    }
    if let Some(kind) = cli.segmenter {
        cfg.segmenter = kind;
    }
    if let Some(path) = &cli.segmenter_dict {
        cfg.segmenter_dictionary = path.clone();
    }
    if let Some(sep) = &cli.separator {
        cfg.sentence_separator = sep.clone();
    }
    cfg.reverse_order |= cli.reverse;
    cfg.clean_subtitles |= cli.clean_subtitles;

    Ok(cfg)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = load_config(&cli)?;

    let report = pipeline::run(
        &cfg,
        &cli.ipath,
        segmenter::from_config,
        &AnkiExporter,
        |summary| println!("{summary}"),
    )?;
    println!("Wrote deck to destination: {}", report.deck_path.display());

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            // A missing dictionary ends the run without a deck, not as a failure
            match e.downcast_ref::<TangoError>() {
                Some(TangoError::MissingDictionary { .. }) => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            }
        }
    }
}
