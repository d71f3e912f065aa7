//! Database-backed repository implementations.

mod pg_record_store;

pub use pg_record_store::PgRecordStore;
