//! AWS Lambda adapter for the payday sweep.
//!
//! This crate owns runtime integration details: environment settings, KMS
//! credential resolution, event decoding and log setup. Sweep behaviour lives
//! in `payday_sweep_core`.

pub mod adapters;
pub mod handlers;
pub mod settings;
pub mod telemetry;
