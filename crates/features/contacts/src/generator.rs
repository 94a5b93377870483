use dforge_domain::models::{Contact, contact_id};
use dforge_persona::Persona;

/// Generates `count` contacts with sequential identifiers starting at 1.
///
/// A count of zero yields an empty batch. There are no error conditions:
/// identifier assignment is purely positional and every other field is
/// whatever the persona provider supplies.
pub fn generate_contacts<P: Persona>(count: u32, persona: &mut P) -> Vec<Contact> {
    let mut contacts = Vec::with_capacity(count as usize);

    for index in 1..=count {
        contacts.push(Contact {
            contact_id: contact_id(index),
            first_name: persona.first_name(),
            last_name: persona.last_name(),
            email: persona.email(),
            phone: persona.phone_number(),
            company: persona.company(),
            job_title: persona.job_title(),
            address: persona.address(),
        });
    }

    tracing::debug!(count = contacts.len(), "Generated contact batch");

    contacts
}
