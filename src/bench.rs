//! Throughput comparison of the radix sort against the standard library sort.

use std::fmt::Write;
use std::time::{Duration, Instant};

use log::{debug, error, info};

use crate::inputs::{generate_trials, InputConfig, InputKind};
use crate::verify::check_sorted;
use crate::RadixSorter;

#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Smallest size as power of two exponent.
    pub min_exp: u32,
    /// Largest size as power of two exponent.
    pub max_exp: u32,
    /// Upper bound for `len * trials`.
    pub max_total: usize,
    pub max_trials: usize,
    /// Verify the output of the last trial.
    pub check: bool,
    pub inputs: InputConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            min_exp: 1,
            max_exp: 24,
            max_total: 16 * 1024 * 1024,
            max_trials: 128,
            check: true,
            inputs: InputConfig::default(),
        }
    }
}

impl BenchConfig {
    pub fn trials_for(&self, len: usize) -> usize {
        self.max_trials.min((self.max_total / len.max(1)).max(1))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchRow {
    pub len: usize,
    pub trials: usize,
    /// Million elements per second.
    pub std_meps: f64,
    pub radix_meps: f64,
    pub speedup: f64,
    pub std_ok: bool,
    pub radix_ok: bool,
}

fn meps(len: usize, trials: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.max(Duration::from_nanos(1)).as_secs_f64();
    (len * trials) as f64 / secs / 1e6
}

fn verified(label: &str, values: &[f32]) -> bool {
    match check_sorted(values) {
        Ok(()) => true,
        Err(e) => {
            error!("{label} failed at N={}: {e}", values.len());
            false
        }
    }
}

pub fn run_size(kind: InputKind, len: usize, config: &BenchConfig, sorter: &mut RadixSorter) -> BenchRow {
    let trials = config.trials_for(len);
    debug!("N={len}, {trials} trials");

    let mut std_inputs = generate_trials(kind, trials, len, &config.inputs);
    let mut radix_inputs = generate_trials(kind, trials, len, &config.inputs);
    let mut radix_out = vec![0.0_f32; len];

    let start = Instant::now();
    for input in std_inputs.iter_mut() {
        input.sort_unstable_by(f32::total_cmp);
    }
    let std_elapsed = start.elapsed();

    let start = Instant::now();
    for input in radix_inputs.iter_mut() {
        sorter.sort(input, &mut radix_out);
    }
    let radix_elapsed = start.elapsed();

    let (std_ok, radix_ok) = if config.check {
        let last = std_inputs.last().map(Vec::as_slice).unwrap_or_default();
        (verified("std sort", last), verified("radix sort", &radix_out))
    } else {
        (true, true)
    };

    let std_meps = meps(len, trials, std_elapsed);
    let radix_meps = meps(len, trials, radix_elapsed);
    BenchRow {
        len,
        trials,
        std_meps,
        radix_meps,
        speedup: radix_meps / std_meps,
        std_ok,
        radix_ok,
    }
}

/// Run one row per power of two size in `min_exp..=max_exp`.
pub fn run_scenario(kind: InputKind, config: &BenchConfig) -> Vec<BenchRow> {
    info!("running {kind:?} scenario, sizes 2^{}..=2^{}", config.min_exp, config.max_exp);
    let mut sorter = RadixSorter::new();
    (config.min_exp..=config.max_exp)
        .map(|e| run_size(kind, 1_usize << e, config, &mut sorter))
        .collect()
}

pub fn format_table(title: &str, rows: &[BenchRow]) -> String {
    let mut out = String::new();
    // writing into a String never fails
    let _ = writeln!(out, "\n=== {title} (million elements/sec) ===");
    let _ = writeln!(out, "{:>12}{:>16}{:>16}{:>12}", "Elements", "std sort", "Radix", "Speedup");
    for row in rows {
        let _ = write!(
            out,
            "{:>12}{:>16.2}{:>16.2}{:>11.2}x",
            row.len, row.std_meps, row.radix_meps, row.speedup
        );
        if !(row.std_ok && row.radix_ok) {
            out.push_str("  FAILED");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trials_for() {
        let config = BenchConfig::default();
        assert_eq!(config.trials_for(2), 128);
        assert_eq!(config.trials_for(1 << 17), 128);
        assert_eq!(config.trials_for(1 << 18), 64);
        assert_eq!(config.trials_for(1 << 24), 1);
        assert_eq!(config.trials_for(1 << 26), 1);
    }

    #[test]
    fn test_run_scenario() {
        let config = BenchConfig {
            min_exp: 1,
            max_exp: 10,
            max_total: 1 << 12,
            ..BenchConfig::default()
        };
        for kind in [InputKind::Random, InputKind::MostlySorted] {
            let rows = run_scenario(kind, &config);
            assert_eq!(rows.len(), 10);
            assert_eq!(rows[0].len, 2);
            assert_eq!(rows[9].len, 1024);
            assert_eq!(rows[9].trials, 4);
            assert!(rows.iter().all(|r| r.std_ok && r.radix_ok));
            assert!(rows.iter().all(|r| r.radix_meps > 0.0 && r.speedup.is_finite()));
        }
    }

    #[test]
    fn test_format_table() {
        let rows = [
            BenchRow {
                len: 1024,
                trials: 4,
                std_meps: 100.0,
                radix_meps: 250.5,
                speedup: 2.5,
                std_ok: true,
                radix_ok: true,
            },
            BenchRow {
                len: 2048,
                trials: 2,
                std_meps: 10.0,
                radix_meps: 5.0,
                speedup: 0.5,
                std_ok: true,
                radix_ok: false,
            },
        ];
        let table = format_table("Random Input", &rows);
        let lines = table.lines().collect::<Vec<_>>();
        assert_eq!(lines[1], "=== Random Input (million elements/sec) ===");
        assert_eq!(lines[2], "    Elements        std sort           Radix     Speedup");
        assert_eq!(lines[3], "        1024          100.00          250.50       2.50x");
        assert!(lines[4].ends_with("0.50x  FAILED"));
    }
}
