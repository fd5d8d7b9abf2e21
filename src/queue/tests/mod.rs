//! Test modules for the queue substrate
//!
//! Organised by functional area: bounded-queue semantics, unbounded-queue
//! semantics, and concurrent stress tests shared by both variants.

mod bounded;
