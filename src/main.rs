use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use wordcloud_rs::{Params, Strategy};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BUILD_GIT_HASH"),
    " ",
    env!("BUILD_DATE"),
    " ",
    env!("BUILD_TARGET"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Render the most frequent words of FILE as an HTML word cloud.",
    long_about = r#"Render the most frequent words of FILE as an HTML word cloud.
A word is a run of ASCII letters and apostrophes, compared case-insensitively.
The page is written to OUT_DIR/<file stem>.html."#
)]
struct WordCloudArgs {
    /// Text corpus to analyze
    #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    file: PathBuf,

    /// Drop words of this length or shorter
    #[arg(long = "min", default_value_t = 6)]
    min_length: usize,

    /// Number of words to render
    #[arg(long = "max", default_value_t = 100)]
    max_words: usize,

    /// Font size in px of the least frequent word
    #[arg(long, default_value_t = 40)]
    min_font: u32,

    /// Font size in px of the most frequent word
    #[arg(long, default_value_t = 200)]
    max_font: u32,

    /// Seed colors and layout order for a reproducible page
    #[arg(long)]
    seed: Option<u64>,

    /// How to read the corpus: mmap or stream
    #[arg(long, default_value_t = Strategy::MemoryMapped)]
    strategy: Strategy,

    /// Directory the HTML page is written to
    #[arg(long, default_value = ".", value_hint = clap::ValueHint::DirPath)]
    out_dir: PathBuf,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl WordCloudArgs {
    fn params(&self) -> Params {
        Params {
            min_length: self.min_length,
            max_words: self.max_words,
            max_font: self.max_font,
            min_font: self.min_font,
            seed: self.seed,
            strategy: self.strategy,
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("wordcloud-rs: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = WordCloudArgs::parse();
    init_logging(args.verbose);

    let params = args.params();
    tracing::debug!(?params, file = %args.file.display(), "CLI initialized");

    let size = std::fs::metadata(&args.file)
        .with_context(|| format!("cannot open '{}'", args.file.display()))?
        .len();
    println!(
        "loading {:.1} MB from {}",
        size as f64 / (1024.0 * 1024.0),
        args.file.display()
    );

    let start = Instant::now();
    let html = wordcloud_rs::generate_html(&args.file, &params)
        .with_context(|| format!("failed to build word cloud for '{}'", args.file.display()))?;
    let elapsed = start.elapsed();

    let written = store_html(&args.out_dir, &args.file, &html)?;
    println!("written: {}", written.display());
    println!("elapsed: {} ms", elapsed.as_millis());
    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Write `html` to `<out_dir>/<input stem>.html` and return that path.
fn store_html(out_dir: &Path, input: &Path, html: &str) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .with_context(|| format!("'{}' has no file name", input.display()))?;
    let mut file_name = stem.to_os_string();
    file_name.push(".html");
    let html_file = out_dir.join(file_name);
    std::fs::write(&html_file, html)
        .with_context(|| format!("cannot write outfile '{}'", html_file.display()))?;
    Ok(html_file)
}
