//! Test modules for the pipeline stages
//!
//! Per-stage suites plus full end-to-end scenario runs.

mod producer;
mod support;
