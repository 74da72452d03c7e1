//! Core domain + application logic for the Would You Rather Machine.
//!
//! This crate is intentionally framework-agnostic. Discord lives behind a
//! port (trait) implemented in the adapter crate.

pub mod collector;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod help;
pub mod logging;
pub mod ports;
pub mod questions;
pub mod vote;

pub use errors::{Error, Result};
