//! Shared plumbing for the standalone database diagnostics binaries.
//!
//! Each binary opens its own pool, prints a short report for one table to
//! stdout, and closes the pool whether or not the queries succeeded.

use std::future::Future;

use geofolio_db::models::geometry_table::GeometryTable;
use geofolio_db::repositories::DiagnosticsRepo;
use geofolio_db::{DbPool, DEFAULT_DATABASE_URL};

/// Tolerance passed to `ST_SimplifyPreserveTopology` by default.
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 0.001;

/// The table both diagnostics report on.
pub const TARGET_TABLE: GeometryTable = GeometryTable::BangladeshLevelTwo;

pub fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into())
}

/// `SIMPLIFY_TOLERANCE`, or the default when unset.
pub fn simplify_tolerance() -> anyhow::Result<f64> {
    match std::env::var("SIMPLIFY_TOLERANCE") {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("SIMPLIFY_TOLERANCE must be a number: {e}")),
        Err(_) => Ok(DEFAULT_SIMPLIFY_TOLERANCE),
    }
}

/// Row count and average GeoJSON size for a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStats {
    pub table: GeometryTable,
    pub count: i64,
    pub avg_geometry_chars: Option<f64>,
}

impl TableStats {
    pub async fn collect(pool: &DbPool, table: GeometryTable) -> Result<Self, sqlx::Error> {
        Ok(Self {
            table,
            count: DiagnosticsRepo::row_count(pool, table).await?,
            avg_geometry_chars: DiagnosticsRepo::avg_geometry_size(pool, table).await?,
        })
    }

    pub fn report(&self) -> String {
        format!(
            "Table: {}\n  Count: {}\n  Avg Geometry Size (Chars): {}",
            self.table,
            self.count,
            format_avg(self.avg_geometry_chars)
        )
    }
}

/// Average GeoJSON size after topology-preserving simplification.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifiedStats {
    pub table: GeometryTable,
    pub tolerance: f64,
    pub avg_geometry_chars: Option<f64>,
}

impl SimplifiedStats {
    pub async fn collect(
        pool: &DbPool,
        table: GeometryTable,
        tolerance: f64,
    ) -> Result<Self, sqlx::Error> {
        Ok(Self {
            table,
            tolerance,
            avg_geometry_chars: DiagnosticsRepo::avg_simplified_geometry_size(
                pool, table, tolerance,
            )
            .await?,
        })
    }

    pub fn report(&self) -> String {
        format!(
            "Table: {} (Optimized)\n  Avg Simplified Geometry Size (Chars): {}",
            self.table,
            format_avg(self.avg_geometry_chars)
        )
    }
}

/// Unrounded average, or `None` for an empty table.
fn format_avg(avg: Option<f64>) -> String {
    avg.map_or_else(|| "None".to_string(), |v| v.to_string())
}

/// Connect, run `query`, print its report or the error, then close the pool.
///
/// Query failures are printed as `Error: ...` and are not fatal; only a
/// failed connection is returned as an error.
pub async fn run<F, Fut, T>(query: F, render: fn(&T) -> String) -> anyhow::Result<()>
where
    F: FnOnce(DbPool) -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    let pool = geofolio_db::create_pool(&database_url()).await?;

    match query(pool.clone()).await {
        Ok(stats) => println!("{}", render(&stats)),
        Err(e) => println!("Error: {e}"),
    }

    pool.close().await;
    Ok(())
}
