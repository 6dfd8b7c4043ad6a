/// Command-line parsing and batch rendering
pub mod cli;
/// Tunable constants, presets and defaults
pub mod configuration;
/// Error type shared across the crate
pub mod error;
/// Diagnostic logging setup
pub mod logging;
/// Batch progress display
pub mod progress;
