// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Parsing Options.
//! `nqueens [N] [-g] [-s SEED] [-e pair-scan|line-count] [-t SECS] [--sweep-limit SWEEPS] [-q] [--stats]`

use crate::solver::{EvaluatorKind, SolverBuilder};
use clap::{
    Arg, ArgAction, Command,
    builder::{PossibleValuesParser, TypedValueParser},
    value_parser,
};
use std::ffi::OsString;
use std::time::Duration;

pub const DEFAULT_SIZE: i64 = 8;

pub fn make_options_parser() -> Command {
    Command::new("nqueens")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Places N non-attacking queens with min-conflicts hill climbing and random restarts")
        .arg(
            Arg::new("n")
                .value_name("N")
                .help("Board size")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("grid")
                .short('g')
                .long("grid")
                .action(ArgAction::SetTrue)
                .help("Print the board as a 0/1 grid before the column list"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .value_parser(value_parser!(u64))
                .help("Seed for the random generator; a run with the same seed is reproduced exactly"),
        )
        .arg(
            Arg::new("evaluator")
                .short('e')
                .long("evaluator")
                .value_name("KIND")
                .value_parser(
                    PossibleValuesParser::new(EvaluatorKind::NAMES)
                        .try_map(|name| name.parse::<EvaluatorKind>()),
                )
                .default_value(EvaluatorKind::default().as_str())
                .help("How candidate columns are scored"),
        )
        .arg(
            Arg::new("time-limit")
                .short('t')
                .long("time-limit")
                .value_name("SECS")
                .value_parser(parse_seconds)
                .help("Give up after this many seconds"),
        )
        .arg(
            Arg::new("sweep-limit")
                .long("sweep-limit")
                .value_name("SWEEPS")
                .value_parser(value_parser!(u64))
                .help("Give up after this many sweeps"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Only print the solution"),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .action(ArgAction::SetTrue)
                .help("Print search statistics after the solution"),
        )
}

fn parse_seconds(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .parse()
        .map_err(|e| format!("`{}` is not a number of seconds: {}", s, e))?;
    Duration::try_from_secs_f64(secs).map_err(|e| format!("invalid time limit `{}`: {}", s, e))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub n: i64,
    pub grid: bool,
    pub seed: Option<u64>,
    pub evaluator: EvaluatorKind,
    pub time_limit: Option<Duration>,
    pub sweep_limit: Option<u64>,
    pub quiet: bool,
    pub stats: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            n: DEFAULT_SIZE,
            grid: false,
            seed: None,
            evaluator: EvaluatorKind::default(),
            time_limit: None,
            sweep_limit: None,
            quiet: false,
            stats: false,
        }
    }
}

impl Options {
    /// Parses a full argument list, program name first.
    pub fn parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;

        Ok(Options {
            n: matches.get_one::<i64>("n").copied().unwrap_or(DEFAULT_SIZE),
            grid: matches.get_flag("grid"),
            seed: matches.get_one::<u64>("seed").copied(),
            evaluator: matches
                .get_one::<EvaluatorKind>("evaluator")
                .copied()
                .unwrap_or_default(),
            time_limit: matches.get_one::<Duration>("time-limit").copied(),
            sweep_limit: matches.get_one::<u64>("sweep-limit").copied(),
            quiet: matches.get_flag("quiet"),
            stats: matches.get_flag("stats"),
        })
    }

    pub fn solver_builder(&self) -> SolverBuilder {
        let mut builder = SolverBuilder::new().with_evaluator(self.evaluator);
        if let Some(seed) = self.seed {
            builder = builder.with_seed(seed);
        }
        if let Some(limit) = self.time_limit {
            builder = builder.with_time_limit(limit);
        }
        if let Some(limit) = self.sweep_limit {
            builder = builder.with_sweep_limit(limit);
        }
        builder
    }
}
