//! Process entrypoint: one JSON birth input on stdin, one energy-profile
//! JSON document on stdout. Diagnostics go to stderr so stdout stays pure.

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use ming_profile::{BirthInput, energy_profile};

#[derive(Parser)]
#[command(name = "ming", about = "Birth-moment energy profile calculator")]
struct Cli {
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut raw = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut raw) {
        eprintln!("failed to read input: {e}");
        return ExitCode::FAILURE;
    }

    let input: BirthInput = match serde_json::from_str(raw.trim()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("invalid input payload: {e}");
            return ExitCode::FAILURE;
        }
    };

    let profile = match energy_profile(&input) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("profile computation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&profile)
    } else {
        serde_json::to_string(&profile)
    };
    match rendered {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to render result: {e}");
            ExitCode::FAILURE
        }
    }
}
