//! Scenario Sweep
//!
//! Monte Carlo sampling of the per-class operating envelope, printing the
//! resulting zone distribution and risk-index statistics. Useful for sanity
//! checks on cutoff placement and for demonstrating the dry-class damping
//! effect numerically.
//!
//! # Usage
//! ```bash
//! ./scenario-sweep --samples 20000 --seed 42
//! ./scenario-sweep --class transmission --ingress
//! ```

use clap::Parser;
use rand::prelude::*;
use rand_distr::{Distribution, Normal};

use hydrawatch::registry::ProfileRegistry;
use hydrawatch::risk::{self, envelope};
use hydrawatch::types::{MeasurementSet, PipelineClass, PipelineProfile, Zone};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "scenario-sweep")]
#[command(about = "Monte Carlo hydrate risk sweep over the operating envelope")]
#[command(version)]
struct Args {
    /// Samples per pipeline class
    #[arg(short, long, default_value = "10000", value_parser = clap::value_parser!(u32).range(1..))]
    samples: u32,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Restrict the sweep to one class (default: all five)
    #[arg(long)]
    class: Option<String>,

    /// Simulate a water ingress event on dry classes
    #[arg(long)]
    ingress: bool,

    /// MEG inhibitor dose setpoint for wet classes (%)
    #[arg(long, default_value = "10.0")]
    meg_target: f64,
}

// ============================================================================
// Sampling
// ============================================================================

/// Draw one measurement set inside (roughly) the profile's envelope.
///
/// Wet classes carry an inhibitor dose jittered around the setpoint plus a
/// produced-water load; dry classes carry water only during an ingress
/// event, mirroring field operating practice.
fn sample_measurements<R: Rng>(
    rng: &mut R,
    profile: &PipelineProfile,
    dose: &Normal<f64>,
    ingress: bool,
) -> MeasurementSet {
    let pressure_bar =
        rng.gen_range(profile.pressure_range_bar.min..=profile.pressure_range_bar.max);
    let temperature_c =
        rng.gen_range(profile.temperature_range_c.min..=profile.temperature_range_c.max);

    if profile.is_dry {
        let mut m = MeasurementSet::dry_preset(pressure_bar, temperature_c, ingress);
        if ingress {
            m.salinity_ppm = rng.gen_range(0.0..=envelope::SALINITY_MAX_PPM);
            m.water_cut_percent = rng.gen_range(0.0..=20.0);
        }
        m
    } else {
        MeasurementSet {
            pressure_bar,
            temperature_c,
            inhibitor_meg_percent: dose.sample(rng).clamp(0.0, envelope::MEG_MAX_PERCENT),
            salinity_ppm: rng.gen_range(0.0..=envelope::SALINITY_MAX_PPM),
            water_cut_percent: rng.gen_range(0.0..=envelope::WATER_CUT_MAX_PERCENT),
            water_ingress_simulated: false,
        }
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let registry = ProfileRegistry::builtin();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let dose = Normal::new(args.meg_target, 2.0)?;

    let classes: Vec<PipelineClass> = match &args.class {
        Some(name) => vec![registry.resolve(name)?.class],
        None => PipelineClass::ALL.to_vec(),
    };

    println!(
        "Sweep: {} samples/class, ingress={}, MEG setpoint {:.1}%",
        args.samples, args.ingress, args.meg_target
    );
    println!();
    println!(
        "{:<14} {:>6} {:>9} {:>9} {:>9} {:>8} {:>8}",
        "Class", "Mode", "SAFE", "WARNING", "DANGER", "mean", "p90"
    );

    for class in classes {
        let profile = registry.get(class);
        let mut counts = [0u32; 3];
        let mut indices = Vec::with_capacity(args.samples as usize);

        for _ in 0..args.samples {
            let m = sample_measurements(&mut rng, profile, &dose, args.ingress);
            let result = risk::evaluate(&m, profile)?;
            counts[result.zone as usize] += 1;
            indices.push(result.risk_index);
        }

        indices.sort_by(|a, b| a.total_cmp(b));
        let n = indices.len();
        let mean = indices.iter().sum::<f64>() / n as f64;
        let p90 = indices[(n * 9 / 10).min(n - 1)];
        let pct = |zone: Zone| f64::from(counts[zone as usize]) / n as f64 * 100.0;

        println!(
            "{:<14} {:>6} {:>8.1}% {:>8.1}% {:>8.1}% {:>8.3} {:>8.3}",
            profile.class.to_string(),
            if profile.is_dry { "dry" } else { "wet" },
            pct(Zone::Safe),
            pct(Zone::Warning),
            pct(Zone::Danger),
            mean,
            p90,
        );
    }

    Ok(())
}
