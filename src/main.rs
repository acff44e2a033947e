//! receipt-points command line
//!
//! Usage:
//!   receipt-points serve             - Run the HTTP service
//!   receipt-points score [FILE]      - Score one receipt and print the breakdown
//!   receipt-points rules             - List rule names

mod report;

use clap::{Parser, Subcommand};
use receipt_points::{ApiConfig, AppState, Options, RuleMask, parse_receipt_json, rule_names, run_server};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "receipt-points")]
#[command(about = "Loyalty points for purchase receipts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP service
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, env = "RECEIPT_POINTS_HOST", default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, env = "RECEIPT_POINTS_PORT", default_value = "8080")]
        port: u16,
    },

    /// Score a receipt JSON document and print a breakdown report
    Score {
        /// Receipt file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Force ANSI color output
        #[arg(long, conflicts_with = "no_color")]
        color: bool,
        /// Disable ANSI color output
        #[arg(long)]
        no_color: bool,
        /// Skip a rule (repeatable), e.g. `--skip odd_day`
        #[arg(long, value_name = "RULE")]
        skip: Vec<String>,
    },

    /// List rule names in breakdown order
    Rules,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Serve { host, port } => serve(ApiConfig { host, port }).await,
        Commands::Score { file, color, no_color, skip } => {
            let color = if color {
                true
            } else if no_color {
                false
            } else {
                io::stdout().is_terminal()
            };
            score(file, color, &skip)
        }
        Commands::Rules => {
            for name in rule_names() {
                println!("{name}");
            }
            0
        }
    };

    std::process::exit(code);
}

async fn serve(config: ApiConfig) -> i32 {
    match run_server(config, AppState::new()).await {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!("server error: {}", err);
            1
        }
    }
}

fn score(file: Option<PathBuf>, color: bool, skip: &[String]) -> i32 {
    let run = || -> Result<(), String> {
        let rules = skip_mask(skip)?;
        let body = read_input(file.as_ref())?;
        let receipt = parse_receipt_json(&body).map_err(|err| format!("error: {err}"))?;

        let verbose = receipt_points::score_verbose_with(&receipt, &Options { rules });
        report::print_run(&receipt, &verbose, color);
        Ok(())
    };

    match run() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            2
        }
    }
}

fn skip_mask(skip: &[String]) -> Result<RuleMask, String> {
    skip.iter().try_fold(RuleMask::all(), |mask, name| {
        let rule = RuleMask::from_rule_name(name).ok_or_else(|| {
            format!("error: unknown rule '{name}' (known rules: {})", rule_names().join(", "))
        })?;
        Ok(mask - rule)
    })
}

fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>, String> {
    match file {
        Some(path) => {
            std::fs::read(path).map_err(|err| format!("error: failed to read {}: {err}", path.display()))
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
            Ok(buffer)
        }
    }
}
