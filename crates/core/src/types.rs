/// Database primary keys, widened to `bigint` at query time.
pub type DbId = i64;
