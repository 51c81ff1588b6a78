//! Core sitrep library (catalog, status, time formatting, config).

pub mod catalog;
pub mod config;
pub mod logging;
pub mod rollup;
pub mod status;
pub mod timefmt;
