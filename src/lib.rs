//! Outflux discovery - reads schema information from InfluxDB to drive a
//! migration into a relational store.
//!
//! This library exposes the core modules for use by the CLI and in
//! integration tests.

pub mod config;
pub mod discovery;
pub mod error;
pub mod idrf;
pub mod influx;
pub mod logging;
