pub mod account;
pub mod application;
pub mod job;
pub mod student_profile;

use thiserror::Error;

/// Raised when a stored enum column holds a value this build does not know.
#[derive(Debug, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
