//! Print the average GeoJSON geometry size of `bangladesh_level_two` after
//! `ST_SimplifyPreserveTopology`.

use geofolio_diagnostics::{run, simplify_tolerance, SimplifiedStats, TARGET_TABLE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let tolerance = simplify_tolerance()?;
    run(
        |pool| async move { SimplifiedStats::collect(&pool, TARGET_TABLE, tolerance).await },
        SimplifiedStats::report,
    )
    .await
}
