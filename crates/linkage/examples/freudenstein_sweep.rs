//! Traces both assembly branches of the example four-bar linkage.
//!
//! Prints `beta, alpha_open, alpha_crossed` rows to stdout. Set `RUST_LOG`
//! (for example `RUST_LOG=pivot_observers=debug`) to see individual solves.

use std::{error::Error, f64::consts::PI};

use pivot_linkage::{Branch, LinkLengths, linspace};
use pivot_observers::TraceObserver;
use pivot_solvers::continuation::SweepConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const STEPS: usize = 61;
const SEEDS: [(&str, f64); 2] = [("open", PI), ("crossed", 5.5)];

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let links = LinkLengths::new(10.0, 13.0, 8.0, 10.0)?;
    let betas = linspace(0.0, 2.0 * PI / 3.0, STEPS);
    let config = SweepConfig {
        max_jump: Some(0.1),
        ..SweepConfig::default()
    };

    info!(
        links = ?links.to_array(),
        grashof = links.is_grashof(),
        steps = STEPS,
        "sweeping input angle"
    );

    let mut branches = Vec::with_capacity(SEEDS.len());
    for (name, seed) in SEEDS {
        let mut trace = TraceObserver::new(name);
        let branch = Branch::trace_observed(&links, &betas, seed, &config, &mut trace)?;

        if branch.is_complete() {
            info!(
                branch = name,
                seed,
                points = trace.events(),
                max_step = branch.max_step(),
                "branch complete"
            );
        } else {
            warn!(branch = name, seed, status = ?branch.status, "branch ended early");
        }
        branches.push(branch);
    }

    println!("beta,alpha_{},alpha_{}", SEEDS[0].0, SEEDS[1].0);
    for (i, beta) in betas.iter().enumerate() {
        let alpha = |branch: &Branch| {
            branch
                .alphas
                .get(i)
                .map_or_else(String::new, ToString::to_string)
        };
        println!("{beta},{},{}", alpha(&branches[0]), alpha(&branches[1]));
    }

    Ok(())
}
