use chrono::NaiveDate;
use dforge_domain::models::{
    Contact, Deal, DealStage, DealType, EnrichedDeal, contact_id, deal_id,
};

fn sample_contact() -> Contact {
    Contact {
        contact_id: contact_id(1),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: "555-0100".to_owned(),
        company: "Analytical Engines".to_owned(),
        job_title: "Engineer".to_owned(),
        address: "12 Byron Row, London, LN 00001".to_owned(),
    }
}

fn sample_deal() -> Deal {
    Deal {
        deal_id: deal_id(1),
        deal_name: "Deal for Widget Project".to_owned(),
        amount: 1234.56,
        stage: DealStage::Negotiation,
        deal_type: DealType::Renewal,
        close_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        contact_id: Some(contact_id(1)),
        probability: 60,
        description: "A deal.".to_owned(),
    }
}

#[test]
fn identifier_helpers_are_zero_padded() {
    assert_eq!(contact_id(1), "CONTACT_001");
    assert_eq!(contact_id(42), "CONTACT_042");
    assert_eq!(contact_id(120), "CONTACT_120");
    assert_eq!(deal_id(7), "DEAL_007");
    assert_eq!(deal_id(1000), "DEAL_1000");
}

#[test]
fn stage_and_type_labels_use_human_names() {
    assert_eq!(DealStage::ClosedWon.to_string(), "Closed Won");
    assert_eq!(DealStage::Prospecting.to_string(), "Prospecting");
    assert_eq!(DealType::NewBusiness.to_string(), "New Business");
    assert_eq!(DealType::Upsell.to_string(), "Upsell");

    assert_eq!(DealStage::ALL.len(), 5);
    assert_eq!(DealType::ALL.len(), 4);
}

#[test]
fn enum_serde_round_trips_human_labels() {
    let json = serde_json::to_string(&DealStage::ClosedLost).unwrap();
    assert_eq!(json, "\"Closed Lost\"");
    let back: DealStage = serde_json::from_str(&json).unwrap();
    assert_eq!(back, DealStage::ClosedLost);
}

#[test]
fn enriched_deal_flattens_deal_fields() {
    let enriched = EnrichedDeal { deal: sample_deal(), contact: Some(sample_contact()) };
    assert!(enriched.has_contact());

    let value = serde_json::to_value(&enriched).unwrap();
    assert_eq!(value["dealId"], "DEAL_001");
    assert_eq!(value["stage"], "Negotiation");
    assert_eq!(value["contact"]["contactId"], "CONTACT_001");

    let unlinked = EnrichedDeal { deal: sample_deal(), contact: None };
    assert!(!unlinked.has_contact());
    assert!(serde_json::to_value(&unlinked).unwrap()["contact"].is_null());
}

#[test]
fn contact_display_includes_name_and_email() {
    let contact = sample_contact();
    assert_eq!(contact.full_name(), "Ada Lovelace");
    assert_eq!(contact.to_string(), "Ada Lovelace <ada@example.com>");
}
