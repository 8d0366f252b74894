use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use feedlens_core::FeedbackError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

mod config;
mod logging;
mod render;
mod state;

use config::{load_config, Config};
use render::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "feedlens", version, about = "Feedback CSV defect classification and usefulness report")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to ~/.feedlens/config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a feedback CSV and print the report
    Report {
        /// Feedback CSV with bot_message, isuseful, created_at, created_by
        #[arg(long)]
        csv: PathBuf,

        /// Output format (default from config, else text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the report to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Passthrough rows shown in text output
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the category of one or more messages
    Classify {
        #[arg(required = true)]
        messages: Vec<String>,
    },

    /// List the active vocabulary in match order
    Vocab,

    /// Config file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config to ~/.feedlens/config.toml
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = load_config(cli.config.as_deref())?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },

        Command::Report {
            csv,
            format,
            output,
            limit,
        } => {
            let cfg = load_config(cli.config.as_deref())?;
            run_report(&cfg, &csv, format, output.as_deref(), limit)?;
        }

        Command::Classify { messages } => {
            let cfg = load_config(cli.config.as_deref())?;
            let analyzer = cfg.analyzer()?;
            for msg in &messages {
                println!("{}\t{}", analyzer.classifier().classify(msg), msg);
            }
        }

        Command::Vocab => {
            let cfg = load_config(cli.config.as_deref())?;
            let vocab = cfg.vocabulary()?;
            for (i, term) in vocab.terms().iter().enumerate() {
                println!("{:>3}. {}", i + 1, term);
            }
        }
    }

    Ok(())
}

fn run_report(
    cfg: &Config,
    csv: &Path,
    format: Option<OutputFormat>,
    output: Option<&Path>,
    limit: Option<usize>,
) -> Result<()> {
    if !csv.exists() {
        bail!("CSV not found: {} (pass --csv <path>)", csv.display());
    }

    let analyzer = cfg.analyzer()?;
    let report = match analyzer.analyze_path(csv) {
        Ok(report) => report,
        Err(FeedbackError::EmptyDataset) => {
            bail!("{}: no data rows, nothing to report", csv.display())
        }
        Err(e) => return Err(e).with_context(|| format!("analyzing {}", csv.display())),
    };

    let format = format.unwrap_or(cfg.report.format);
    let limit = limit.unwrap_or(cfg.report.limit);

    let mut out: Box<dyn Write> = match output {
        Some(p) => Box::new(BufWriter::new(
            File::create(p).with_context(|| format!("create {}", p.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match format {
        OutputFormat::Text => render::render_text(&report, limit, &mut out)?,
        OutputFormat::Json => render::render_json(&report, &mut out)?,
    }
    out.flush()?;

    if let Some(p) = output {
        info!(path = %p.display(), "report written");
        println!("Wrote {}", p.display());
    }
    Ok(())
}
