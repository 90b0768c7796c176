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

use env_logger::Env;
use queens_solver::{cli::Options, render};
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    if std::env::var("QUEENS_LOG").is_ok() {
        let e = Env::new()
            .filter("QUEENS_LOG")
            .write_style("QUEENS_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let options = match Options::parse_from(std::env::args_os()) {
        Ok(options) => options,
        Err(e) => e.exit(),
    };

    match run(&options) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> io::Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !options.quiet {
        render::write_banner(&mut out)?;
        out.flush()?;
    }

    let solver = options.solver_builder().build();
    let start = Instant::now();
    let outcome = match solver.solve(options.n) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    let elapsed = start.elapsed();

    let search = outcome.search();
    if !search.is_solved() {
        eprintln!("error: {} (seed {})", search.termination_reason(), outcome.seed());
        eprintln!(
            "best board {} has {} conflicts",
            search.board(),
            search.conflicts()
        );
        if options.stats {
            eprintln!("{}", search.statistics());
        }
        return Ok(ExitCode::FAILURE);
    }

    render::write_solution(&mut out, search.board(), options.grid)?;
    if !options.quiet {
        render::write_timing(&mut out, elapsed)?;
    }
    if options.stats {
        writeln!(out, "Seed: {}", outcome.seed())?;
        write!(out, "{}", search.statistics())?;
    }
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
