//! # Deal Generation
//!
//! Produces ordered batches of synthetic CRM deals with sequential
//! `DEAL_<index>` identifiers. Monetary, stage, and date fields are drawn
//! from an injected seedable RNG; textual fields come from the injected
//! [`Persona`](dforge_persona::Persona) provider.
//!
//! Deals reference contacts by identifier only. The reference index range is
//! deliberately independent of the number of contacts that actually exist,
//! so a batch routinely contains dangling references alongside deals with no
//! contact at all. Both are expected downstream, not errors.

mod generator;

pub use generator::{DealBatchConfig, generate_deals};
