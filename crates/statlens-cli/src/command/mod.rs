use std::io;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{chart::ChartArg, describe::DescribeArg, generate::GenerateArg};

mod chart;
mod describe;
mod generate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Print debug diagnostics to stderr (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
    /// What to do with the data
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print descriptive statistics for one or two datasets
    Describe(#[clap(flatten)] DescribeArg),
    /// Print a line of random integers usable as a dataset
    Generate(#[clap(flatten)] GenerateArg),
    /// Show histogram, scatter and box plot charts in the terminal
    Chart(#[clap(flatten)] ChartArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);
    match args.mode {
        Mode::Describe(arg) => describe::run(&arg)?,
        Mode::Generate(arg) => generate::run(&arg)?,
        Mode::Chart(arg) => chart::run(&arg)?,
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_describe_with_compare() {
        let args = CommandArgs::try_parse_from([
            "statlens",
            "describe",
            "1,2,3",
            "--compare",
            "4 5 6",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(!args.verbose);
        assert!(matches!(args.mode, Mode::Describe(_)));
    }

    #[test]
    fn test_verbose_is_global() {
        let args = CommandArgs::try_parse_from(["statlens", "generate", "--verbose"]).unwrap();
        assert!(args.verbose);
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(CommandArgs::try_parse_from(["statlens"]).is_err());
    }
}
