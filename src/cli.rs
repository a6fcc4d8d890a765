//! Command-line front end.
//!
//! The engine only ever sees a string; everything here is the glue around
//! it: argument handling, reading a file, the interactive prompt and
//! console rendering.

pub mod input;
pub mod interactive;
pub mod render;

pub use render::OutputFormat;

use crate::{Detector, DetectorConfig};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::{
    io::{self, Write},
    path::PathBuf,
};
use thiserror::Error;

/// Errors raised around the engine, never by it.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read `{}`: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{}` is not valid UTF-8: {reason}", path.display())]
    InvalidUtf8 { path: PathBuf, reason: String },
}

const EXAMPLES: &str = "\
EJEMPLOS:
  spanglish \"Hello world\"
  spanglish \"Hola mundo\"
  spanglish \"Hi, ¿cómo estás?\"
  spanglish -f archivo.txt

Sin argumentos se abre el modo interactivo; escribe \"salir\" para terminar.";

#[derive(Debug, Parser)]
#[command(
    name = "spanglish",
    version,
    about = "Detect whether text is Spanish, English or a mix of both",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Text to classify; words are joined with single spaces
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Vec<String>,

    /// Classify the whole content of a UTF-8 file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file overriding weights and thresholds
    #[arg(short, long, value_name = "FILE", env = "SPANGLISH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Compose decomposed accents (NFC) before analysis
    #[arg(long)]
    pub nfc: bool,

    /// Increase verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    File(PathBuf),
    Text(String),
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if let Some(path) = &self.file {
            Mode::File(path.clone())
        } else if self.text.is_empty() {
            Mode::Interactive
        } else {
            Mode::Text(self.text.join(" "))
        }
    }

    /// Initialize logging based on verbosity level. `RUST_LOG` wins.
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .format_timestamp(None)
            .init();
    }

    pub fn detector(&self) -> Result<Detector> {
        let mut config = match &self.config {
            Some(path) => DetectorConfig::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => DetectorConfig::default(),
        };
        if self.nfc {
            config.compose = true;
        }
        log::debug!("detector config: {config:?}");
        Ok(Detector::new(config)?)
    }

    pub fn run(&self) -> Result<()> {
        let detector = self.detector()?;
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.mode() {
            Mode::Interactive => {
                let stdin = io::stdin();
                interactive::run(&detector, self.format, stdin.lock(), &mut out)?;
            }
            Mode::File(path) => {
                log::info!("classifying file {}", path.display());
                let text = input::read_text(&path)?;
                render::write(&mut out, &detector.detect(&text), self.format)?;
            }
            Mode::Text(text) => {
                render::write(&mut out, &detector.detect(&text), self.format)?;
            }
        }

        out.flush()?;
        Ok(())
    }
}
