//! Loads a small sample and prints its statistics.
//!
//! Run with `RUST_LOG=debug` to see outlier filtering events.

use tracing_subscriber::EnvFilter;
use u_describe::{Dataset, StatsResult};

fn main() -> StatsResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sample = vec![10.0, 20.0, 30.0, 40.0, 50.0, 35.0, 25.0, 15.0, 45.0, 100.0];
    let mut data = Dataset::new();
    data.load(sample.clone());

    println!("=== Data Processor Demo ===");
    println!("Original data: {sample:?}");
    println!("\nAverage: {}", data.mean()?);
    println!("Median: {}", data.median()?);
    println!("Standard Deviation: {:.2}", data.std_dev()?);

    println!(
        "\nFiltered data (outliers removed): {:?}",
        data.filter_outliers(u_describe::DEFAULT_OUTLIER_THRESHOLD)?
    );
    let normalized: Vec<String> = data
        .normalize()?
        .iter()
        .map(|v| format!("{v:.2}"))
        .collect();
    println!("Normalized data: {normalized:?}");

    println!("\n=== Summary Statistics ===");
    if let Some(summary) = data.summary()? {
        println!("{summary}");
    }
    Ok(())
}
