use std::process;

use anyhow::Context;
use clap::Parser;

use passforge::{generate, GenerationRequest};

/// Generate constrained random passwords from a cryptographically secure
/// source.
///
/// With no category flag, all four categories are enabled.
#[derive(Parser)]
struct Args {
    /// Password length in characters (1 to 1000).
    #[arg(long, short = 'n', default_value_t = 16)]
    length: i64,
    /// Include uppercase letters (A-Z).
    #[arg(long)]
    upper: bool,
    /// Include lowercase letters (a-z).
    #[arg(long)]
    lower: bool,
    /// Include digits (0-9).
    #[arg(long)]
    digits: bool,
    /// Include symbols.
    #[arg(long)]
    symbols: bool,
    /// Replace the default symbol alphabet with these characters
    /// (implies --symbols).
    #[arg(long)]
    custom_symbols: Option<String>,
    /// Number of passwords to generate, one per line.
    #[arg(long, short = 'c', default_value_t = 1)]
    count: u32,
    /// Read the request as a JSON object instead of flags, e.g.
    /// {"length":12,"useUppercase":true,"useDigits":true}.
    #[arg(
        long,
        conflicts_with_all = ["length", "upper", "lower", "digits", "symbols", "custom_symbols"]
    )]
    json: Option<String>,
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let request = match args.json.as_deref() {
        Some(raw) => serde_json::from_str(raw).context("failed to parse the JSON request")?,
        None => request_from_flags(&args),
    };

    for _ in 0..args.count {
        let password = generate(&request)?;
        println!("{}", password.as_str());
    }
    Ok(())
}

fn request_from_flags(args: &Args) -> GenerationRequest {
    let symbols = args.symbols || args.custom_symbols.is_some();
    let none_selected = !(args.upper || args.lower || args.digits || symbols);
    GenerationRequest {
        length: args.length,
        use_uppercase: args.upper || none_selected,
        use_lowercase: args.lower || none_selected,
        use_digits: args.digits || none_selected,
        use_symbols: symbols || none_selected,
        custom_symbols: args.custom_symbols.clone().unwrap_or_default(),
    }
}

fn main() {
    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("{err:#}");
            process::exit(1);
        }
    }
}
