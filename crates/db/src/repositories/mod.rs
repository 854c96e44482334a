//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod admin_area_repo;
pub mod diagnostics_repo;

pub use admin_area_repo::AdminAreaRepo;
pub use diagnostics_repo::DiagnosticsRepo;
