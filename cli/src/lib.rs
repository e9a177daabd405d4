//! `numclass` command-line front end.
//!
//! Obtains the upper limit (argument or stdin prompt), derives the exponent
//! bound for the Mersenne scans, runs every classifier operation under a
//! timer and renders the results.
//!
//! ## Commands
//!
//! - `numclass [LIMIT]` - full analysis up to LIMIT
//! - `numclass classify <N>` - divisors and class of a single number

pub mod config;
pub mod report;
pub mod timing;

use std::io::BufRead;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use numclass_core::classify;
use numclass_core::divisor_sum;
use numclass_core::exponent_bound;
use numclass_core::find_abundant_numbers;
use numclass_core::find_deficient_numbers;
use numclass_core::find_mersenne_primes;
use numclass_core::find_perfect_numbers;
use numclass_core::generate_even_perfect_numbers;
use numclass_core::hybrid_analysis;
use numclass_core::proper_divisors;
use serde::Serialize;

use crate::config::NumclassConfig;
use crate::report::AnalysisReport;
use crate::report::Section;
use crate::report::format_sequence;

const WELCOME: &str = "Welcome to the Number Analysis Program!";
const LIMIT_PROMPT: &str = "Enter the upper limit for number analysis (e.g., 1000): ";

/// Perfect, deficient and abundant numbers, Mersenne primes and even
/// perfect numbers up to a limit
#[derive(Debug, Parser)]
#[command(name = "numclass", version, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<NumclassSubcommand>,

    #[command(flatten)]
    pub analyze: AnalyzeArgs,
}

#[derive(Debug, Subcommand)]
pub enum NumclassSubcommand {
    /// Show the proper divisors, divisor sum and class of one number
    Classify(ClassifyArgs),
}

#[derive(Debug, clap::Args)]
pub struct AnalyzeArgs {
    /// Upper limit of the analysis (read from stdin when omitted)
    #[arg(value_name = "LIMIT")]
    pub limit: Option<u64>,

    /// Output as JSON for automation
    #[arg(long)]
    pub json: bool,

    /// Omit execution times
    #[arg(long)]
    pub no_timings: bool,

    /// Override config path (default: ~/.config/numclass/numclass.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, clap::Args)]
pub struct ClassifyArgs {
    /// Number to classify (at least 1)
    #[arg(value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub number: u64,

    /// Output as JSON for automation
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn run(self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        match self.command {
            Some(NumclassSubcommand::Classify(args)) => run_classify(&args, out),
            None => run_analyze(&self.analyze, input, out),
        }
    }
}

/// Parse an operator-supplied upper limit.
pub fn parse_limit(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    trimmed
        .parse::<u64>()
        .with_context(|| format!("invalid upper limit `{trimmed}`: expected a non-negative integer"))
}

fn read_limit(input: &mut impl BufRead) -> Result<u64> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read upper limit from stdin")?;
    if read == 0 {
        anyhow::bail!("no upper limit given: stdin closed before a value was entered");
    }
    parse_limit(&line)
}

fn run_analyze(args: &AnalyzeArgs, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let config = NumclassConfig::load(args.config.as_deref())?;
    let show_timings = config.show_timings && !args.no_timings;

    if !args.json {
        writeln!(out, "{WELCOME}")?;
    }
    let limit = match args.limit {
        Some(limit) => limit,
        None => {
            if !args.json {
                write!(out, "{LIMIT_PROMPT}")?;
                out.flush()?;
            }
            read_limit(input)?
        }
    };

    let max_exponent = config.clamp_exponent(exponent_bound(limit));
    tracing::info!(limit, max_exponent, "starting analysis");
    if !args.json {
        writeln!(
            out,
            "Automatically set maximum value for 'p' in even perfect numbers to: {max_exponent}"
        )?;
        writeln!(out, "\nStarting numerical analysis...\n")?;
    }

    let report = analyze(limit, max_exponent, show_timings)?;

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        report.write_text(out)?;
        writeln!(out, "Analysis completed.")?;
    }
    Ok(())
}

/// Run every classifier operation for `limit`, timing each one.
pub fn analyze(limit: u64, max_exponent: u32, show_timings: bool) -> Result<AnalysisReport> {
    let timed = |elapsed: Duration| show_timings.then_some(elapsed);

    let (perfect, perfect_elapsed) = measure_time!("Perfect Numbers", { find_perfect_numbers(limit) });
    let (even_perfect, even_perfect_elapsed) = measure_time!("Even Perfect Numbers", {
        generate_even_perfect_numbers(max_exponent)
    });
    let (mersenne, mersenne_elapsed) =
        measure_time!("Mersenne Primes", { find_mersenne_primes(max_exponent) });
    let (deficient, deficient_elapsed) =
        measure_time!("Deficient Numbers", { find_deficient_numbers(limit) });
    let (abundant, abundant_elapsed) =
        measure_time!("Abundant Numbers", { find_abundant_numbers(limit) });

    let sections = vec![
        Section::new("Perfect Numbers", perfect, timed(perfect_elapsed)),
        Section::new("Even Perfect Numbers", even_perfect?, timed(even_perfect_elapsed)),
        Section::new("Mersenne Primes", mersenne?, timed(mersenne_elapsed)),
        Section::new("Deficient Numbers", deficient, timed(deficient_elapsed)),
        Section::new("Abundant Numbers", abundant, timed(abundant_elapsed)),
    ];

    Ok(AnalysisReport {
        limit,
        max_exponent,
        sections,
        hybrid: hybrid_analysis(limit),
    })
}

#[derive(Debug, Serialize)]
struct ClassifyReport {
    number: u64,
    class: numclass_core::NumberClass,
    proper_divisors: Vec<u64>,
    divisor_sum: u128,
}

fn run_classify(args: &ClassifyArgs, out: &mut impl Write) -> Result<()> {
    let class = classify(args.number)
        .with_context(|| format!("{} is outside the classifiable range", args.number))?;
    let mut divisors = proper_divisors(args.number);
    divisors.sort_unstable();
    let report = ClassifyReport {
        number: args.number,
        class,
        proper_divisors: divisors,
        divisor_sum: divisor_sum(args.number),
    };

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "{}: {}", report.number, report.class)?;
        writeln!(out, "Proper divisors: {}", format_sequence(&report.proper_divisors))?;
        writeln!(out, "Divisor sum: {}", report.divisor_sum)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_args(args: &[&str], stdin: &str) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("numclass").chain(args.iter().copied()))?;
        let mut input = std::io::Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        cli.run(&mut input, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn parse_limit_accepts_integers_with_whitespace() {
        assert_eq!(parse_limit(" 1000\n").expect("parse"), 1000);
        assert_eq!(parse_limit("0").expect("parse"), 0);
    }

    #[test]
    fn parse_limit_rejects_non_integers() {
        for bad in ["", "abc", "-5", "3.5", "1e3"] {
            let err = parse_limit(bad).expect_err("should fail");
            assert!(err.to_string().contains("invalid upper limit"), "{bad}");
        }
    }

    #[test]
    fn analyze_builds_sections_in_order() {
        let report = analyze(30, exponent_bound(30), false).expect("analyze");
        let titles: Vec<&str> = report.sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Perfect Numbers",
                "Even Perfect Numbers",
                "Mersenne Primes",
                "Deficient Numbers",
                "Abundant Numbers",
            ]
        );
        assert_eq!(report.max_exponent, 3);
        assert_eq!(report.sections[0].values, vec![6, 28]);
        assert_eq!(report.sections[1].values, vec![6, 28]);
        assert_eq!(report.sections[2].values, vec![3, 7]);
        assert!(report.sections.iter().all(|s| s.elapsed.is_none()));
    }

    #[test]
    fn analyze_rejects_unsupported_exponent() {
        assert!(analyze(10, 65, false).is_err());
    }

    #[test]
    fn prompts_for_limit_when_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = dir.path().join("numclass.toml");
        std::fs::write(&config, "show_timings = false\n").expect("write config");
        let config = config.to_string_lossy().into_owned();

        let text = run_args(&["--config", &config], "10\n").expect("run");
        assert!(text.starts_with(&format!("{WELCOME}\n{LIMIT_PROMPT}")));
        assert!(text.contains("Perfect Numbers\n---------------\n6\n\n"));
        assert!(!text.contains("Execution time"));
        assert!(text.ends_with("Analysis completed.\n"));
    }

    #[test]
    fn closed_stdin_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = dir.path().join("numclass.toml");
        std::fs::write(&config, "").expect("write config");
        let config = config.to_string_lossy().into_owned();

        let err = run_args(&["--config", &config], "").expect_err("should fail");
        assert!(err.to_string().contains("no upper limit"));
    }

    #[test]
    fn classify_text_output() {
        let text = run_args(&["classify", "28"], "").expect("run");
        assert_eq!(
            text,
            "28: perfect\nProper divisors: 1, 2, 4, 7, 14\nDivisor sum: 28\n"
        );
        let text = run_args(&["classify", "1"], "").expect("run");
        assert_eq!(text, "1: deficient\nProper divisors: No data.\nDivisor sum: 0\n");
    }

    #[test]
    fn classify_rejects_zero() {
        assert!(Cli::try_parse_from(["numclass", "classify", "0"]).is_err());
    }
}
