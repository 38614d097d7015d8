//! Ratio analysis of a bundled provider payload.
//!
//! ```sh
//! RUST_LOG=ratiocalc=debug cargo run --example ratio_demo -- 2021-03-31
//! ```
//!
//! Positional arguments are periods to exclude from the report.

use ratiocalc::data::{Fundamentals, StaticSource};
use ratiocalc::{AnalysisConfig, RatioAnalyzer};
use tracing_subscriber::EnvFilter;

const PAYLOAD: &str = include_str!("../tests/fixtures/itc.json");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let source = StaticSource::new().with(Fundamentals::from_json_str(PAYLOAD)?);
    let config = std::env::args()
        .skip(1)
        .fold(AnalysisConfig::new("ITC.NS"), AnalysisConfig::exclude);

    let analysis = RatioAnalyzer::new().run(&source, &config)?;

    println!("{}", analysis.table);
    if let Some(health) = &analysis.health {
        println!("\n{health}");
    }
    for exclusion in &analysis.unmatched_exclusions {
        println!("ignored exclusion: {exclusion}");
    }

    let df = analysis.table.to_dataframe()?;
    println!("\n{df}");

    Ok(())
}
