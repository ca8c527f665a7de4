//! clip-demo: Builds example convex solids and intersects them.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=convex_clip=debug` - One line per cutting face
//! - `RUST_LOG=convex_clip=trace` - Every edge classification
//!
//! Without `RUST_LOG`, `-v` raises the level step by step.
//!
//! # Example
//!
//! ```bash
//! clip-demo --scenario overlap
//! RUST_LOG=convex_clip=debug clip-demo --scenario all --serial
//! ```

use anyhow::Result;
use clap::Parser;
use config::constants::DEFAULT_LOG_FILTER;
use convex_clip::ClipConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod scenarios;

use scenarios::{Outcome, Scenario};

/// clip-demo - intersect example convex polyhedra.
#[derive(Parser)]
#[command(name = "clip-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Which example to run
    #[arg(long, short, value_enum, default_value = "all")]
    scenario: Scenario,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Clip every face on the calling thread
    #[arg(long)]
    serial: bool,
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => DEFAULT_LOG_FILTER,
            1 => "convex_clip=debug,clip_demo=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn print_outcome(outcome: &Outcome) {
    match &outcome.result {
        Some(solid) => {
            println!(
                "{}: {} faces, {} vertices, volume {:.6}",
                outcome.name,
                solid.face_count(),
                solid.unique_vertices().len(),
                solid.volume()
            );
            println!("{solid}");
        }
        None => println!("{}: no intersection", outcome.name),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = if cli.serial {
        ClipConfig::serial()
    } else {
        ClipConfig::default()
    };

    for case in scenarios::cases(cli.scenario)? {
        println!("{}: subject = {}", case.name, case.subject);
        println!("{}: clipper = {}", case.name, case.clipper);
        let outcome = scenarios::run(case, &config)?;
        print_outcome(&outcome);
    }

    Ok(())
}
