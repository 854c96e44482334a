//! Closed set of geometry tables that may be named in dynamic SQL.

use std::fmt;

/// A PostGIS table with a `geom` column.
///
/// Diagnostics queries interpolate the table name, so only these variants
/// can ever reach the SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryTable {
    MonglaUpazila,
    BangladeshLevelTwo,
}

impl GeometryTable {
    pub fn as_str(self) -> &'static str {
        match self {
            GeometryTable::MonglaUpazila => "mongla_upazila",
            GeometryTable::BangladeshLevelTwo => "bangladesh_level_two",
        }
    }
}

impl fmt::Display for GeometryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
