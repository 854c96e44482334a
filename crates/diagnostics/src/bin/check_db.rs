//! Print the row count and average GeoJSON geometry size of
//! `bangladesh_level_two`.

use geofolio_diagnostics::{run, TableStats, TARGET_TABLE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    run(
        |pool| async move { TableStats::collect(&pool, TARGET_TABLE).await },
        TableStats::report,
    )
    .await
}
