//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `chrono`, `strum`).
//! Keep it lean: no I/O, no randomness, no heavy logic, just data and simple helpers.

pub mod config;
pub mod models;
