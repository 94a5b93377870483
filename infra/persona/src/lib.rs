//! # Persona
//!
//! The realistic fake-data collaborator used by the generators.
//!
//! Field values (names, emails, companies, ...) are plausible but arbitrary;
//! only their shape matters to callers. The provider is an explicitly
//! constructed, passed-in handle rather than a module-level singleton, so a
//! fixed seed makes an entire generation run reproducible.
//!
//! ## Example
//!
//! ```rust
//! use dforge_persona::{FakePersona, Persona};
//!
//! let mut persona = FakePersona::seeded(7);
//! assert!(!persona.first_name().is_empty());
//! ```

use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::job::en::Title;
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Source of plausible person and business field values.
///
/// Every method draws a fresh value; implementations are free to repeat
/// values across calls. Single-line outputs are guaranteed: no method
/// returns embedded newlines.
pub trait Persona {
    fn first_name(&mut self) -> String;
    fn last_name(&mut self) -> String;
    fn email(&mut self) -> String;
    fn phone_number(&mut self) -> String;
    fn company(&mut self) -> String;
    fn job_title(&mut self) -> String;
    /// A full postal address on a single line (`street, city, state zip`).
    fn address(&mut self) -> String;
    /// A single lowercase word.
    fn word(&mut self) -> String;
    /// A short free-text sentence.
    fn sentence(&mut self) -> String;
}

/// Default [`Persona`] implementation backed by the `fake` crate and a
/// seedable [`StdRng`].
#[derive(Debug)]
pub struct FakePersona {
    rng: StdRng,
}

impl FakePersona {
    /// Creates a provider with a fixed seed; identical seeds yield identical
    /// value sequences.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Creates a provider seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }
}

impl Persona for FakePersona {
    fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    fn email(&mut self) -> String {
        SafeEmail().fake_with_rng(&mut self.rng)
    }

    fn phone_number(&mut self) -> String {
        PhoneNumber().fake_with_rng(&mut self.rng)
    }

    fn company(&mut self) -> String {
        CompanyName().fake_with_rng(&mut self.rng)
    }

    fn job_title(&mut self) -> String {
        Title().fake_with_rng(&mut self.rng)
    }

    fn address(&mut self) -> String {
        let building: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        let city: String = CityName().fake_with_rng(&mut self.rng);
        let state: String = StateAbbr().fake_with_rng(&mut self.rng);
        let zip: String = ZipCode().fake_with_rng(&mut self.rng);
        format!("{building} {street}, {city}, {state} {zip}")
    }

    fn word(&mut self) -> String {
        Word().fake_with_rng(&mut self.rng)
    }

    fn sentence(&mut self) -> String {
        Sentence(4..9).fake_with_rng(&mut self.rng)
    }
}
