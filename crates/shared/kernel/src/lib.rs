//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for config loading.
//!
//! ## Config loading
//! ```rust,ignore
//! use dforge_kernel::config::load_config;
//! let cfg: dforge_domain::config::AppConfig = load_config(None::<&str>).unwrap();
//! ```

pub mod config;

pub use dforge_domain as domain;
