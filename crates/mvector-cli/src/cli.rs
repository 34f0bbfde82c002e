use clap::{Arg, Command, ValueHint};
use std::path::PathBuf;

fn vector_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .allow_hyphen_values(true)
        .value_parser(clap::builder::NonEmptyStringValueParser::new())
}

fn scalar_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(f64))
}

/// Argument definition for the `mvector` binary.
pub fn build_cli() -> Command {
    Command::new("mvector")
        .version(clap::crate_version!())
        .about("Vector arithmetic from the command line")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("describe")
                .about("Print length, squared length, unit vector and near-zero test")
                .arg(vector_arg("vector", "Vector such as '[1, 2, 3]' or '1,2,3'")),
        )
        .subcommand(
            Command::new("combine")
                .about("Apply a binary vector operation")
                .arg(
                    Arg::new("op")
                        .help("Operation to apply")
                        .required(true)
                        .value_parser(["add", "sub", "mul", "dot", "cross"]),
                )
                .arg(vector_arg("a", "Left operand"))
                .arg(vector_arg("b", "Right operand")),
        )
        .subcommand(
            Command::new("scale")
                .about("Multiply every component by a scalar")
                .arg(vector_arg("vector", "Vector to scale"))
                .arg(scalar_arg("factor", "Scale factor")),
        )
        .subcommand(
            Command::new("divide")
                .about("Divide every component by a scalar")
                .arg(vector_arg("vector", "Vector to divide"))
                .arg(scalar_arg("divisor", "Divisor")),
        )
        .subcommand(
            Command::new("random")
                .about("Fill a vector with uniform samples")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON random-fill configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("len")
                        .short('n')
                        .long("len")
                        .help("Number of components. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("min")
                        .long("min")
                        .help("Lower bound (inclusive). Overrides the configuration file.")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("max")
                        .long("max")
                        .help("Upper bound (inclusive). Overrides the configuration file.")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("seed")
                        .short('s')
                        .long("seed")
                        .help("Seed for a reproducible fill. A fresh random seed is used when omitted.")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("demo").about("Print the length of unit_vector([1, 2, 3, 4, 5])"),
        )
}
