// Recommendation Engine
// Implements: profile normalization, weighted scoring, missing-skill enrichment, top-N ranking.
// Pure computation over the loaded catalog; no I/O outside tracing events.

pub mod engine;
pub mod handlers;
pub mod profile;
pub mod scoring;
