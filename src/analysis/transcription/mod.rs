//! Speech-to-text module
//!
//! Turns the isolated vocal track into plain lyrics text via a hosted
//! transcription service.

pub mod assemblyai;

pub use assemblyai::AssemblyAiTranscriber;
