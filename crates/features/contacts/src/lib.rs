//! # Contact Generation
//!
//! Produces ordered batches of synthetic CRM contacts with sequential
//! `CONTACT_<index>` identifiers. All non-identifier fields come from the
//! injected [`Persona`](dforge_persona::Persona) provider, so a seeded
//! provider makes the whole batch reproducible.

mod generator;

pub use generator::generate_contacts;
