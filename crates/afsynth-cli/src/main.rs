use afsynth_core::observe::{init_logging, LogConfig, LogLevel};
use afsynth_core::prelude::*;
use afsynth_core::report;
use anyhow::{Context, Result};
use clap::ArgMatches;
use std::path::PathBuf;

mod cli;

fn main() {
    // clap exits with status 2 on usage errors
    let matches = cli::app().get_matches();

    let exit_code = match run(&matches) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(matches: &ArgMatches) -> Result<()> {
    if matches.get_flag("example-config") {
        print!("{}", AfsConfig::example_yaml());
        return Ok(());
    }

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => AfsConfig::load_from(path)?,
        None => AfsConfig::load()?,
    };
    if let Some(name) = matches.get_one::<String>("preset") {
        config = config.with_preset(name)?;
    }

    let log = log_config(&config.logging, matches)?;
    init_logging(&log);
    tracing::debug!(?log, "logging initialized");

    apply_overrides(&mut config.filter, matches)?;
    config.validate()?;

    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");

    if matches.get_flag("compare") {
        return print_comparison(&config.filter, format);
    }

    let result = synthesize(&config.filter)
        .with_context(|| format!("{} {} synthesis failed", config.filter.approximation, config.filter.filter_type))?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        "yaml" => print!("{}", serde_yaml::to_string(&result)?),
        _ => print!("{}", report::poles_zeros_listing(&config.filter, &result)),
    }
    Ok(())
}

/// Logging setup from the job file, with -v/-vv and then --log on top.
///
/// A level given on the command line becomes the filter directive, so it
/// also wins over `RUST_LOG`.
fn log_config(base: &LogConfig, matches: &ArgMatches) -> Result<LogConfig> {
    let mut level = match matches.get_count("verbose") {
        0 => None,
        1 => Some(LogLevel::Debug),
        _ => Some(LogLevel::Trace),
    };
    if let Some(s) = matches.get_one::<String>("log") {
        level = Some(s.parse().map_err(anyhow::Error::msg)?);
    }

    let mut log = base.clone();
    if let Some(level) = level {
        log.level = level;
        log.filter = Some(level.to_string());
    }
    Ok(log)
}

/// Apply command-line flags on top of the job file's filter section.
fn apply_overrides(spec: &mut FilterSpec, matches: &ArgMatches) -> Result<()> {
    if let Some(s) = matches.get_one::<String>("type") {
        spec.filter_type = s.parse()?;
    }
    if let Some(s) = matches.get_one::<String>("approx") {
        spec.approximation = s.parse()?;
    }

    let fields: [(&str, &mut f64); 9] = [
        ("ripple", &mut spec.passband_ripple_db),
        ("edge-atten", &mut spec.passband_atten_db),
        ("atten", &mut spec.stopband_atten_db),
        ("fc", &mut spec.cutoff_freq),
        ("fs", &mut spec.stopband_freq),
        ("fl", &mut spec.lower_freq),
        ("fu", &mut spec.upper_freq),
        ("tw", &mut spec.transition_width),
        ("gain", &mut spec.passband_gain),
    ];
    for (id, target) in fields {
        if let Some(v) = matches.get_one::<f64>(id) {
            *target = *v;
        }
    }

    if let Some(&order) = matches.get_one::<i32>("order") {
        spec.requested_order = order;
    }
    if let Some(num) = matches.get_many::<f64>("num") {
        spec.transfer_function.numerator = num.copied().collect();
    }
    if let Some(den) = matches.get_many::<f64>("den") {
        spec.transfer_function.denominator = den.copied().collect();
    }
    Ok(())
}

fn print_comparison(spec: &FilterSpec, format: &str) -> Result<()> {
    let results = compare_orders(spec);

    if format == "text" {
        for (approximation, outcome) in &results {
            match outcome {
                Ok(order) => println!("{:<18} order {}", approximation.to_string(), order),
                Err(e) => println!("{:<18} {}", approximation.to_string(), e),
            }
        }
        return Ok(());
    }

    let rows: Vec<serde_json::Value> = results
        .iter()
        .map(|(approximation, outcome)| match outcome {
            Ok(order) => serde_json::json!({ "approximation": approximation, "order": order }),
            Err(e) => serde_json::json!({ "approximation": approximation, "error": e.to_string() }),
        })
        .collect();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", serde_yaml::to_string(&rows)?);
    }
    Ok(())
}
