//! CRM record types produced by the generators and consumed by the synchronizer.
//!
//! Records are created once per generation run and never mutated afterwards;
//! enrichment builds new composite values instead of touching its inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Formats the canonical contact identifier for a 1-based index (`CONTACT_001`, ...).
///
/// Indices above 999 widen naturally (`CONTACT_1000`).
#[must_use]
pub fn contact_id(index: u32) -> String {
    format!("CONTACT_{index:03}")
}

/// Formats the canonical deal identifier for a 1-based index (`DEAL_001`, ...).
#[must_use]
pub fn deal_id(index: u32) -> String {
    format!("DEAL_{index:03}")
}

/// A synthetic CRM contact.
///
/// All non-identifier fields are supplied by the persona provider; only their
/// shape is meaningful. The `address` is a single line with no embedded newlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Contact {
    /// Unique `CONTACT_<index>` token, sequential from 1 within a run.
    pub contact_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub job_title: String,
    pub address: String,
}

impl Contact {
    /// The contact's display name (`first last`).
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A synthetic CRM deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Deal {
    /// Unique `DEAL_<index>` token, sequential from 1 within a run.
    pub deal_id: String,
    pub deal_name: String,
    /// Monetary amount in [1000, 50000], rounded to two decimal places.
    pub amount: f64,
    pub stage: DealStage,
    pub deal_type: DealType,
    pub close_date: NaiveDate,
    /// Optional reference to a contact identifier. A reference that matches no
    /// generated contact (a dangling reference) is expected and never an error.
    pub contact_id: Option<String>,
    /// Win probability in [0, 100].
    pub probability: u8,
    pub description: String,
}

/// A deal augmented with its resolved contact relationship.
///
/// `contact` is the absence marker (`None`) when the deal's reference is
/// missing or dangling. This is a derived, ephemeral view; it is never
/// persisted and never read back, so it is serialize-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedDeal {
    #[serde(flatten)]
    pub deal: Deal,
    pub contact: Option<Contact>,
}

impl EnrichedDeal {
    /// Whether the deal resolved to an existing contact.
    #[must_use]
    pub const fn has_contact(&self) -> bool {
        self.contact.is_some()
    }
}

/// Pipeline stage of a deal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
pub enum DealStage {
    Prospecting,
    Qualification,
    Negotiation,
    #[serde(rename = "Closed Won")]
    #[strum(serialize = "Closed Won")]
    ClosedWon,
    #[serde(rename = "Closed Lost")]
    #[strum(serialize = "Closed Lost")]
    ClosedLost,
}

impl DealStage {
    /// Every stage, in pipeline order.
    pub const ALL: [Self; 5] = [
        Self::Prospecting,
        Self::Qualification,
        Self::Negotiation,
        Self::ClosedWon,
        Self::ClosedLost,
    ];
}

/// Business category of a deal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
pub enum DealType {
    #[serde(rename = "New Business")]
    #[strum(serialize = "New Business")]
    NewBusiness,
    #[serde(rename = "Existing Business")]
    #[strum(serialize = "Existing Business")]
    ExistingBusiness,
    Renewal,
    Upsell,
}

impl DealType {
    /// Every deal type.
    pub const ALL: [Self; 4] =
        [Self::NewBusiness, Self::ExistingBusiness, Self::Renewal, Self::Upsell];
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.full_name(), self.email)
    }
}
