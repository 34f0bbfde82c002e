use anyhow::Result;
use clap::ArgMatches;
use log::LevelFilter;
use std::str::FromStr;

use mvector_cli::cli::build_cli;
use mvector_cli::commands::{self, BinaryOp};
use mvector_cli::config::RandomConfig;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MVECTOR_LOG", "error,mvector=info"))
        .init();

    let matches = build_cli().get_matches();

    let (name, result) = match matches.subcommand() {
        Some(("describe", sub_m)) => ("describe", handle_describe(sub_m)),
        Some(("combine", sub_m)) => ("combine", handle_combine(sub_m)),
        Some(("scale", sub_m)) => ("scale", handle_scale(sub_m)),
        Some(("divide", sub_m)) => ("divide", handle_divide(sub_m)),
        Some(("random", sub_m)) => ("random", handle_random(sub_m)),
        Some(("demo", _)) => {
            println!("{}", commands::demo());
            ("demo", Ok(()))
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("{} failed: {:#}", name, e);
            std::process::exit(1)
        }
    }
}

fn handle_describe(matches: &ArgMatches) -> Result<()> {
    let v = commands::point_arg(matches, "vector")?;
    println!("{}", commands::describe(&v));
    Ok(())
}

fn handle_combine(matches: &ArgMatches) -> Result<()> {
    let op = matches
        .get_one::<String>("op")
        .map(|s| BinaryOp::from_str(s))
        .transpose()
        .map_err(anyhow::Error::msg)?
        .ok_or_else(|| anyhow::anyhow!("Missing argument 'op'"))?;
    let a = commands::point_arg(matches, "a")?;
    let b = commands::point_arg(matches, "b")?;
    println!("{}", commands::combine(op, &a, &b)?);
    Ok(())
}

fn handle_scale(matches: &ArgMatches) -> Result<()> {
    let v = commands::point_arg(matches, "vector")?;
    let factor = commands::scalar_arg(matches, "factor")?;
    println!("{}", commands::scale(&v, factor));
    Ok(())
}

fn handle_divide(matches: &ArgMatches) -> Result<()> {
    let v = commands::point_arg(matches, "vector")?;
    let divisor = commands::scalar_arg(matches, "divisor")?;
    println!("{}", commands::divide(&v, divisor)?);
    Ok(())
}

fn handle_random(matches: &ArgMatches) -> Result<()> {
    let config = RandomConfig::from_arguments(matches)?;
    log::info!("Random fill with config: {:?}", config);
    println!("{}", commands::random(&config)?);
    Ok(())
}
