//! Facade crate for `DealForge` features and shared modules.
//! Re-exports domain/kernel primitives and composes the generation pipeline.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`generate`] with a config, a seed, and a reference date to run the
//!   whole pipeline: contacts, deals, and the enrichment join.
//! - Reach into the re-exported crates for the individual stages.

pub use dforge_contacts as contacts;
pub use dforge_deals as deals;
pub use dforge_domain as domain;
pub use dforge_kernel as kernel;
pub use dforge_persona as persona;
pub use dforge_sync as sync;

use chrono::NaiveDate;
use dforge_deals::DealBatchConfig;
use dforge_domain::config::AppConfig;
use dforge_domain::models::{Contact, Deal, EnrichedDeal};
use dforge_persona::FakePersona;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// One full generation run: the independent source collections plus the
/// enriched join result.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub contacts: Vec<Contact>,
    pub deals: Vec<Deal>,
    pub enriched: Vec<EnrichedDeal>,
}

/// Runs the whole pipeline for `config` with a fixed `seed`.
///
/// The same `(config, seed, as_of)` triple always produces the same dataset:
/// the persona provider and the numeric RNG are both derived from `seed`,
/// on separate streams so persona draws do not perturb numeric draws.
#[must_use]
pub fn generate(config: &AppConfig, seed: u64, as_of: NaiveDate) -> Dataset {
    let mut persona = FakePersona::seeded(seed);
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));

    let contacts = contacts::generate_contacts(config.generation.contacts, &mut persona);

    let batch = DealBatchConfig::from_generation(&config.generation, as_of);
    let deals = deals::generate_deals(&batch, &mut rng, &mut persona);

    let enriched = sync::synchronize(&deals, &contacts);

    Dataset { contacts, deals, enriched }
}
