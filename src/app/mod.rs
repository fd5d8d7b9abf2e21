//! Application startup and CLI wiring

pub mod cli;
pub mod startup;
