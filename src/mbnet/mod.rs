// src/mbnet/mod.rs
pub mod client;
pub mod models;

// Re-export the record type for convenience
#[allow(unused_imports)]
pub use models::DrawRecord;
