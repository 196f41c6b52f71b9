//! Shared library modules providing error types, sample data, and telemetry initialization.

pub mod errors;
pub mod samples;
pub mod telemetry;
