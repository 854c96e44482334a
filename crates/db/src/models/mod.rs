//! Row structs for the PostGIS tables the API reads.

pub mod admin_area;
pub mod geometry_table;
