use dforge_persona::{FakePersona, Persona};

#[test]
fn seeded_providers_are_deterministic() {
    let mut a = FakePersona::seeded(42);
    let mut b = FakePersona::seeded(42);

    for _ in 0..16 {
        assert_eq!(a.first_name(), b.first_name());
        assert_eq!(a.email(), b.email());
        assert_eq!(a.address(), b.address());
        assert_eq!(a.sentence(), b.sentence());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = FakePersona::seeded(1);
    let mut b = FakePersona::seeded(2);

    // A handful of draws is enough; a collision across all of them would be
    // astronomically unlikely.
    let left: Vec<String> = (0..8).map(|_| a.email()).collect();
    let right: Vec<String> = (0..8).map(|_| b.email()).collect();
    assert_ne!(left, right);
}

#[test]
fn values_have_plausible_shape() {
    let mut persona = FakePersona::seeded(7);

    assert!(!persona.first_name().is_empty());
    assert!(!persona.last_name().is_empty());
    assert!(persona.email().contains('@'));
    assert!(!persona.phone_number().is_empty());
    assert!(!persona.company().is_empty());
    assert!(!persona.job_title().is_empty());
    assert!(!persona.word().is_empty());
    assert!(!persona.sentence().is_empty());
}

#[test]
fn address_is_a_single_line() {
    let mut persona = FakePersona::seeded(11);
    for _ in 0..32 {
        let address = persona.address();
        assert!(!address.contains('\n'), "address must be newline-free: {address:?}");
        assert!(address.contains(','), "address should be comma-separated: {address:?}");
    }
}
