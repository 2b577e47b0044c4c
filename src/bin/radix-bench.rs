use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use float_radix_sort::bench::{format_table, run_scenario, BenchConfig};
use float_radix_sort::inputs::{InputConfig, InputKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scenario {
    Random,
    MostlySorted,
    Both,
}

/// Compare radix sort throughput against the standard library sort.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Smallest input size as power of two
    #[arg(long, default_value_t = 1)]
    min_exp: u32,

    /// Largest input size as power of two
    #[arg(long, default_value_t = 24)]
    max_exp: u32,

    /// Cap for elements times trials per size
    #[arg(long, default_value_t = 16 * 1024 * 1024)]
    max_total: usize,

    /// Maximum trials per size
    #[arg(long, default_value_t = 128)]
    max_trials: usize,

    /// Skip verifying the sort order
    #[arg(long, default_value_t = false)]
    no_check: bool,

    /// Seed for input generation
    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Which inputs to run
    #[arg(long, value_enum, default_value_t = Scenario::Both)]
    scenario: Scenario,
}

impl Args {
    fn config(&self) -> Result<BenchConfig> {
        ensure!(
            self.min_exp <= self.max_exp,
            "min-exp {} is larger than max-exp {}",
            self.min_exp,
            self.max_exp
        );
        ensure!(self.max_exp <= 31, "max-exp {} is larger than 31", self.max_exp);
        ensure!(self.max_trials > 0, "max-trials must be positive");

        Ok(BenchConfig {
            min_exp: self.min_exp,
            max_exp: self.max_exp,
            max_total: self.max_total,
            max_trials: self.max_trials,
            check: !self.no_check,
            inputs: InputConfig {
                seed: self.seed,
                ..InputConfig::default()
            },
        })
    }

    fn scenarios(&self) -> &'static [(&'static str, InputKind)] {
        const RANDOM: (&str, InputKind) = ("Random Input", InputKind::Random);
        const MOSTLY_SORTED: (&str, InputKind) = ("Mostly-Sorted Input", InputKind::MostlySorted);
        match self.scenario {
            Scenario::Random => &[RANDOM],
            Scenario::MostlySorted => &[MOSTLY_SORTED],
            Scenario::Both => &[RANDOM, MOSTLY_SORTED],
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.config()?;

    for &(title, kind) in args.scenarios() {
        let rows = run_scenario(kind, &config);
        print!("{}", format_table(title, &rows));
    }
    Ok(())
}
