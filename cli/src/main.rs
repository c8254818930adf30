//! Command-line front end for normalizing pinyin and converting it to and
//! from the binary form.

use std::{
    fs::File,
    io::{self, BufRead, BufWriter, Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tonemark::{ParseOptions, PinyinString, avec};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "tonemark")]
#[command(about = "Normalize numbered or CC-CEDICT pinyin into tone-marked pinyin")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical spelling of each text (or each line of stdin)
    Normalize {
        /// Pinyin texts to normalize
        text: Vec<String>,

        /// Drop spaces, commas and center dots instead of keeping word breaks
        #[arg(long)]
        no_word_breaks: bool,
    },

    /// Write the binary form of each text (or each line of stdin)
    Encode {
        /// Pinyin texts to encode
        text: Vec<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Drop spaces, commas and center dots instead of keeping word breaks
        #[arg(long)]
        no_word_breaks: bool,
    },

    /// Print the canonical spelling of each string in a binary file
    Decode {
        /// Binary file (stdin if not specified)
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Normalize {
            text,
            no_word_breaks,
        } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();

            for line in inputs(text)? {
                let s = parse(&line, no_word_breaks)?;
                writeln!(out, "{s}")?;
            }
        }
        Commands::Encode {
            text,
            output,
            no_word_breaks,
        } => {
            let mut out: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("Failed to create {}", path.display()))?,
                )),
                None => Box::new(io::stdout().lock()),
            };

            let mut count = 0;
            for line in inputs(text)? {
                let s = parse(&line, no_word_breaks)?;
                avec::encode_writer(&s, &mut out)?;
                count += 1;
            }
            out.flush()?;

            tracing::info!(count, "encoded pinyin strings");
        }
        Commands::Decode { input } => {
            let mut data = Vec::new();
            match &input {
                Some(path) => File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?
                    .read_to_end(&mut data)?,
                None => io::stdin().lock().read_to_end(&mut data)?,
            };

            let stdout = io::stdout();
            let mut out = stdout.lock();

            let mut rest = data.as_slice();
            while !rest.is_empty() {
                let offset = data.len() - rest.len();
                let (s, tail) = avec::decode_slice(rest)
                    .with_context(|| format!("Failed to decode string at byte {offset}"))?;
                writeln!(out, "{s}")?;
                rest = tail;
            }
        }
    }

    Ok(())
}

/// The texts given as arguments, or the lines of stdin if there are none.
fn inputs(text: Vec<String>) -> Result<Vec<String>> {
    if !text.is_empty() {
        return Ok(text);
    }

    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<_>>()
        .context("Failed to read stdin")
}

fn parse(text: &str, no_word_breaks: bool) -> Result<PinyinString> {
    let options = ParseOptions {
        word_breaks: !no_word_breaks,
    };

    tonemark::parse_with(text, options).with_context(|| format!("Failed to parse \"{text}\""))
}
