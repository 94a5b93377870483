use chrono::{NaiveDate, TimeDelta};
use dforge_domain::config::GenerationConfig;
use dforge_domain::models::{Deal, DealStage, DealType, contact_id, deal_id};
use dforge_persona::Persona;
use rand::Rng;

const AMOUNT_RANGE: (f64, f64) = (1000.0, 50_000.0);
const CLOSE_DATE_OFFSET_DAYS: (i64, i64) = (-30, 90);

/// Input parameters for one deal batch.
#[derive(Debug, Clone)]
pub struct DealBatchConfig {
    /// Number of deals to generate.
    pub count: u32,
    /// Reference date; close dates fall within [-30, +90] days of it.
    pub as_of: NaiveDate,
    /// Upper bound (inclusive) of the contact index range references are drawn from.
    ///
    /// Kept independent of the actual contact count so batches contain
    /// dangling references. Must be at least 1.
    pub reference_span: u32,
    /// Probability in [0, 1] that a deal carries no contact reference.
    pub unlinked_ratio: f64,
}

impl DealBatchConfig {
    /// Batch parameters from the application [`GenerationConfig`].
    #[must_use]
    pub fn from_generation(cfg: &GenerationConfig, as_of: NaiveDate) -> Self {
        Self {
            count: cfg.deals,
            as_of,
            reference_span: cfg.reference_span,
            unlinked_ratio: cfg.unlinked_ratio,
        }
    }
}

/// Generates `config.count` deals with sequential identifiers starting at 1.
///
/// A count of zero yields an empty batch; there are no error conditions for
/// valid parameters. Callers must ensure `unlinked_ratio` lies in [0, 1]
/// and `reference_span >= 1`.
pub fn generate_deals<R: Rng, P: Persona>(
    config: &DealBatchConfig,
    rng: &mut R,
    persona: &mut P,
) -> Vec<Deal> {
    debug_assert!((0.0..=1.0).contains(&config.unlinked_ratio));
    debug_assert!(config.reference_span >= 1);

    let mut deals = Vec::with_capacity(config.count as usize);

    for index in 1..=config.count {
        let amount = round_cents(rng.random_range(AMOUNT_RANGE.0..=AMOUNT_RANGE.1));
        let stage = DealStage::ALL[rng.random_range(0..DealStage::ALL.len())];
        let deal_type = DealType::ALL[rng.random_range(0..DealType::ALL.len())];
        let close_offset =
            rng.random_range(CLOSE_DATE_OFFSET_DAYS.0..=CLOSE_DATE_OFFSET_DAYS.1);
        let contact_ref = if rng.random_bool(1.0 - config.unlinked_ratio) {
            Some(contact_id(rng.random_range(1..=config.reference_span)))
        } else {
            None
        };

        deals.push(Deal {
            deal_id: deal_id(index),
            deal_name: format!("Deal for {} Project", title_case(&persona.word())),
            amount,
            stage,
            deal_type,
            close_date: config.as_of + TimeDelta::days(close_offset),
            contact_id: contact_ref,
            probability: rng.random_range(0..=100),
            description: persona.sentence(),
        });
    }

    tracing::debug!(count = deals.len(), "Generated deal batch");

    deals
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
