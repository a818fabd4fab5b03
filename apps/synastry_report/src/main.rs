use std::path::PathBuf;

use anyhow::Context;
use synastry::{CachedGeocoder, SynastryReport, SynastryService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = synastry_config::load_config(config_path.as_deref())?;
    let (a, b) = config
        .pair
        .clone()
        .context("Config has no [pair.a]/[pair.b] birth data to compare")?;

    log::info!(
        "Comparing {} {} ({}) with {} {} ({})",
        a.date,
        a.time,
        a.place,
        b.date,
        b.time,
        b.place
    );

    let service = SynastryService::new(CachedGeocoder::new(config.geocoder()), config.engine);
    let (chart_a, chart_b) = service.charts_for(&a, &b).await?;
    let result = service.compare(&chart_a, &chart_b)?;

    log::info!("Combined synastry score: {:.4}", result.combined_score());

    let report = SynastryReport::new(&result);
    println!("{}", report.to_json_pretty()?);
    Ok(())
}
