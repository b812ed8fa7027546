use std::time::Duration;

use clap::Args;
use fridgechef_core::{Config, Detector, ImagePayload, Pantry, Result, SimulatedDetector};

#[derive(Args)]
pub struct DetectArgs {
    /// Override the simulated recognition delay
    #[arg(long)]
    delay_ms: Option<u64>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(args: DetectArgs) -> Result<()> {
    let config = Config::load_or_default();
    let delay_ms = args.delay_ms.unwrap_or(config.detection.delay_ms);
    let detector = SimulatedDetector::with_items(config.detection.canned_ingredients);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(async { tokio::time::sleep(Duration::from_millis(delay_ms)).await });

    // Same cleanup a session applies when the scan lands.
    let detected: Pantry = detector.detect(&ImagePayload::default())?.into_iter().collect();
    tracing::info!(count = detected.len(), delay_ms, "detection finished");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&detected)?);
    } else {
        for name in detected.iter() {
            println!("{name}");
        }
    }
    Ok(())
}
