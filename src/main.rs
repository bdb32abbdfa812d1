mod cli;
mod config;
mod output;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::debug;
use storage_units::{parse::parse_in, StorageUnit};

use crate::{
    cli::Args,
    config::Config,
    output::{
        errors::print_errors,
        summary::make_summary,
        table::{print_lines, print_table},
    },
};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Before building the config, so locale fallbacks are reported
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level(args.verbose))).init();

    let config: Config = args.try_into()?;
    debug!(
        "target={:?} locale={} rounding={:?}",
        config.target,
        config.format.locale(),
        config.format.rounding()
    );

    let (results, errors) = read_quantities(&config);

    if config.table {
        for (input, quantity) in &results {
            print_table(input, quantity, config.target.family_of(quantity), &config.format);
        }
    } else {
        print_lines(&results, &config.target, &config.format);
    }

    if config.total {
        let total: StorageUnit = results.iter().map(|(_, q)| q).sum();
        print!(
            "\n{}",
            make_summary(&total, &config.target, &config.format, results.len(), errors.len())
        );
    }

    if !errors.is_empty() {
        if !config.no_errors {
            print_errors(&errors);
        }
        std::process::exit(1);
    }

    Ok(())
}

fn log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn read_quantities(config: &Config) -> (Vec<(String, StorageUnit)>, Vec<anyhow::Error>) {
    let mut results = Vec::new();
    let mut errors = Vec::new();

    for input in &config.quantities {
        match parse_in(input, config.input_family).with_context(|| format!("'{input}'")) {
            Ok(quantity) => {
                debug!("{input} -> {} bytes as {:?}", quantity.bytes(), quantity.unit());
                results.push((input.clone(), quantity));
            }
            Err(err) => errors.push(err),
        }
    }

    (results, errors)
}
