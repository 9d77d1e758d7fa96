//! Vocal separation module
//!
//! Isolates the vocal track of a song so it can be transcribed. The actual
//! source separation is done out of process by spleeter.

pub mod spleeter;

pub use spleeter::SpleeterSeparator;
