//! Runners behind each subcommand. They return the text to print.
use anyhow::{Context, Result};
use clap::ArgMatches;
use std::str::FromStr;

use mvector::{cross, dot, Point};

use crate::config::RandomConfig;

/// Binary operations accepted by `combine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Dot,
    Cross,
}

impl FromStr for BinaryOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(BinaryOp::Add),
            "sub" => Ok(BinaryOp::Sub),
            "mul" => Ok(BinaryOp::Mul),
            "dot" => Ok(BinaryOp::Dot),
            "cross" => Ok(BinaryOp::Cross),
            _ => Err(format!(
                "Unknown operation: {}. Expected one of add, sub, mul, dot, cross",
                s
            )),
        }
    }
}

pub fn parse_point(s: &str) -> Result<Point> {
    s.parse::<Point>()
        .with_context(|| format!("Invalid vector: {}", s))
}

pub fn point_arg(matches: &ArgMatches, name: &str) -> Result<Point> {
    let raw = matches
        .get_one::<String>(name)
        .with_context(|| format!("Missing argument '{}'", name))?;
    parse_point(raw)
}

pub fn scalar_arg(matches: &ArgMatches, name: &str) -> Result<f64> {
    matches
        .get_one::<f64>(name)
        .copied()
        .with_context(|| format!("Missing argument '{}'", name))
}

pub fn describe(v: &Point) -> String {
    format!(
        "vector:    {}\nlength_sq: {}\nlength:    {}\nunit:      {}\nnear_zero: {}",
        v,
        v.length_sq(),
        v.length(),
        v.unit_vector(),
        v.near_zero()
    )
}

pub fn combine(op: BinaryOp, a: &Point, b: &Point) -> Result<String> {
    let rendered = match op {
        BinaryOp::Add => a.try_add(b)?.to_string(),
        BinaryOp::Sub => a.try_sub(b)?.to_string(),
        BinaryOp::Mul => a.try_mul(b)?.to_string(),
        BinaryOp::Dot => dot(a, b)?.to_string(),
        BinaryOp::Cross => cross(a, b)?.to_string(),
    };
    Ok(rendered)
}

pub fn scale(v: &Point, factor: f64) -> Point {
    factor * v
}

pub fn divide(v: &Point, divisor: f64) -> Result<Point> {
    Ok(v.try_div_scalar(divisor)?)
}

pub fn random(config: &RandomConfig) -> Result<Point> {
    let mut point = Point::zeros(config.len);
    match config.seed {
        Some(seed) => {
            point.random_seeded(seed, config.min, config.max)?;
        }
        None => {
            point.random_range(config.min, config.max)?;
        }
    }
    log::info!(
        "Filled {} components from [{}, {}]",
        config.len,
        config.min,
        config.max
    );
    Ok(point)
}

/// Length of the unit vector of `[1, 2, 3, 4, 5]`.
pub fn demo() -> f64 {
    Point::from([1.0, 2.0, 3.0, 4.0, 5.0]).unit_vector().length()
}
