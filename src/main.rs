use std::env;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use censor_core::{CensorConfig, CensorSensor, FixedMask, LocaleRegistry, Tier};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "censor",
    about = "Detect and redact tiered profanity in text"
)]
struct Cli {
    /// Config file (defaults to ./censor.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Locale to match against
    #[arg(long, global = true)]
    locale: Option<String>,
    /// Tier to switch off: id (1-5) or name, e.g. possibly_offensive
    #[arg(long = "disable-tier", global = true)]
    disable_tiers: Vec<Tier>,
    /// Extra word, optionally with a tier: `frak` or `frak=2`
    #[arg(long = "add-word", global = true)]
    add_words: Vec<String>,
    /// Word to suppress, even if the locale lists it
    #[arg(long = "remove-word", global = true)]
    remove_words: Vec<String>,
    /// Fixed replacement text for redaction
    #[arg(long, global = true)]
    mask: Option<String>,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Exact token check; exits 1 when profane
    Check { text: Option<String> },
    /// Substring check; exits 1 when profane
    CheckIsh { text: Option<String> },
    /// Mask profane tokens
    Clean { text: Option<String> },
    /// Mask every fragment that contains a profane word
    CleanIsh { text: Option<String> },
    /// Print the substring redaction plan as JSON
    Hits { text: Option<String> },
    /// Print the effective lexicon as JSON
    Words,
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut engine = build_engine(&cli)?;
    for spec in &cli.add_words {
        let (word, tier) = parse_word(spec)?;
        engine.add_word(word, tier);
    }
    for word in &cli.remove_words {
        engine.remove_word(word.clone());
    }
    for tier in &cli.disable_tiers {
        engine.disable_tier(*tier);
    }
    if let Some(mask) = &cli.mask {
        engine.set_clean_function(FixedMask::new(mask.clone()));
    }

    match cli.cmd {
        Cmd::Check { text } => Ok(verdict(engine.is_profane(&input(text)?))),
        Cmd::CheckIsh { text } => Ok(verdict(engine.is_profane_ish(&input(text)?))),
        Cmd::Clean { text } => {
            println!("{}", engine.clean_profanity(&input(text)?));
            Ok(ExitCode::SUCCESS)
        }
        Cmd::CleanIsh { text } => {
            println!("{}", engine.clean_profanity_ish(&input(text)?));
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Hits { text } => {
            let plan = engine.redactions(&input(text)?);
            println!("{}", serde_json::to_string_pretty(&plan)?);
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Words => {
            let words = json!({
                "locale": engine.locale(),
                "words": engine.effective_lexicon(),
            });
            println!("{}", serde_json::to_string_pretty(&words)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn build_engine(cli: &Cli) -> Result<CensorSensor> {
    tracing::debug!(config = ?cli.config, locale = ?cli.locale, "building engine");
    let mut cfg = match &cli.config {
        Some(path) => CensorConfig::from_file(path)?,
        None => {
            let cwd = env::current_dir().context("resolving current directory")?;
            CensorConfig::load(&cwd)?
        }
    };
    if let Some(locale) = &cli.locale {
        cfg.engine.locale = locale.clone();
    }
    CensorSensor::from_config(&cfg, LocaleRegistry::with_builtins())
}

fn parse_word(spec: &str) -> Result<(String, Tier)> {
    match spec.split_once('=') {
        Some((word, tier)) => {
            if word.is_empty() {
                bail!("empty word in --add-word `{spec}`");
            }
            Ok((word.to_string(), tier.parse()?))
        }
        None => Ok((spec.to_string(), Tier::UserAdded)),
    }
}

fn input(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("reading text from stdin")?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

fn verdict(profane: bool) -> ExitCode {
    println!("{}", if profane { "profane" } else { "clean" });
    if profane {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
