use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use fermi::{
    DEFAULT_SAMPLE_COUNT,
    config::EvaluationOptions,
    evaluate_expression_with_steps,
    interpreter::value::outcome::StepsOutcome,
    presentation::{
        format::format_number,
        histogram::{HistogramOptions, generate_text_histogram},
        quantiles::get_quantiles,
    },
};
use tracing_subscriber::EnvFilter;

/// fermi evaluates uncertain arithmetic (`1~3 * 12`) and currency
/// expressions (`120eur + 50pln to usd`).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells fermi to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Number of Monte-Carlo samples drawn for each range.
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: usize,

    /// Seed for reproducible sampling.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with evaluation options (`currencyRates`, `seed`).
    #[arg(short, long)]
    rates: Option<PathBuf>,

    /// Prints the full outcome as JSON.
    #[arg(long)]
    json: bool,

    /// Number of histogram bins.
    #[arg(long, default_value_t = 20)]
    bins: usize,

    /// Width of the longest histogram bar.
    #[arg(long, default_value_t = 40)]
    width: usize,

    contents: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let expression = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(text) => text,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };

    let mut options = match &args.rates {
        Some(path) => match EvaluationOptions::from_file(path) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("Failed to read options from '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        },
        None => EvaluationOptions::default(),
    };
    if args.seed.is_some() {
        options.seed = args.seed;
    }

    match evaluate_expression_with_steps(expression.trim(), args.samples, &options) {
        Ok(outcome) => {
            if args.json {
                match serde_json::to_string_pretty(&outcome) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("{e}");
                        return ExitCode::FAILURE;
                    },
                }
            } else {
                print_outcome(&outcome, &args);
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn print_outcome(outcome: &StepsOutcome, args: &Args) {
    for (i, step) in outcome.steps.iter().enumerate() {
        println!("{:>3}. {step}", i + 1);
    }

    let Some(result) = &outcome.result else {
        println!("(empty expression)");
        return;
    };
    println!("= {}", result.display);

    if let Some(samples) = &result.samples {
        let suffix = result.currency.as_deref().unwrap_or("");
        let quantiles = get_quantiles(Some(samples.as_slice()));
        println!("range {}{suffix} .. {}{suffix}",
                 format_number(result.min, 0),
                 format_number(result.max, 0));
        println!("90% {}{suffix} .. {}{suffix}",
                 format_number(quantiles.p05, 0),
                 format_number(quantiles.p95, 0));

        let options = HistogramOptions { bins: args.bins,
                                         width: args.width,
                                         ..HistogramOptions::default() };
        for line in generate_text_histogram(Some(samples.as_slice()), &options) {
            println!("{line}");
        }
    }
}
