use rand::SeedableRng as _;
use rand_pcg::Pcg32;
use statlens_stats::random::{self, DEFAULT_COUNT, DEFAULT_MAX, DEFAULT_MIN};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Number of values to generate
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    count: usize,
    /// Smallest possible value (inclusive)
    #[arg(long, default_value_t = DEFAULT_MIN, allow_negative_numbers = true)]
    min: i64,
    /// Largest possible value (inclusive)
    #[arg(long, default_value_t = DEFAULT_MAX, allow_negative_numbers = true)]
    max: i64,
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg {
        count,
        min,
        max,
        seed,
    } = *arg;

    if min > max {
        tracing::warn!("--min {min} is greater than --max {max}, swapping bounds");
    }
    let values = match seed {
        Some(seed) => random::generate_data(&mut Pcg32::seed_from_u64(seed), count, min, max),
        None => random::generate_data(&mut rand::rng(), count, min, max),
    };
    println!("{}", format_line(&values));
    Ok(())
}

fn format_line(values: &[f64]) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
