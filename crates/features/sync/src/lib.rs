//! # Deal/Contact Synchronization
//!
//! The enrichment join: resolves each deal's optional contact reference
//! against the contact collection and attaches either the matched contact
//! record or the explicit absence marker (`None`).
//!
//! ## Algorithm
//!
//! One pass over the contacts builds an identifier lookup (last write wins
//! on duplicates, though generation guarantees uniqueness), then one pass
//! over the deals resolves references, O(n + m) overall. The join is a pure
//! function: inputs are borrowed immutably, the output is a fresh
//! collection, and running it twice on the same inputs yields identical
//! results.

use dforge_domain::models::{Contact, Deal, EnrichedDeal};
use fxhash::FxHashMap;

/// Joins `deals` to `contacts` by contact identifier.
///
/// The output has the same length and order as `deals`. A deal with no
/// reference, or with a reference that matches no contact (a dangling
/// reference), carries the absence marker; neither case is an error.
#[must_use]
pub fn synchronize(deals: &[Deal], contacts: &[Contact]) -> Vec<EnrichedDeal> {
    let lookup: FxHashMap<&str, &Contact> =
        contacts.iter().map(|contact| (contact.contact_id.as_str(), contact)).collect();

    let enriched: Vec<EnrichedDeal> = deals
        .iter()
        .map(|deal| {
            let contact = deal
                .contact_id
                .as_deref()
                .and_then(|id| lookup.get(id))
                .map(|found| (*found).clone());
            EnrichedDeal { deal: deal.clone(), contact }
        })
        .collect();

    let matched = enriched.iter().filter(|item| item.has_contact()).count();
    tracing::debug!(
        deals = enriched.len(),
        contacts = contacts.len(),
        matched,
        unmatched = enriched.len() - matched,
        "Synchronized deals with contacts"
    );

    enriched
}
