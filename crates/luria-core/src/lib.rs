//! luria-core
//!
//! Pure domain types for the Luria score normalization engine.
//! No I/O — this is the shared vocabulary between the engine and the
//! workflow, persistence, and report layers that surround it.

pub mod config;
pub mod models;
