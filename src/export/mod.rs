//! Export modules for stage artifacts and the JSON profile report

pub mod artifact;
pub mod json;

pub use artifact::{
    read_document, recorded_source, require_input, write_provenance, write_text,
};
pub use json::{write_profile, LyricProfile, PROFILE_FILE_NAME};
