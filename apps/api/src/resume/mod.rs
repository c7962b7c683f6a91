// Resume intake: persist the upload locally, then forward it to the analysis engine.
// The engine's response body is passed through to the caller unchanged.

pub mod analyzer;
pub mod handlers;
pub mod storage;
