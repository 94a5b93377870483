use chrono::NaiveDate;
use dforge_deals::{DealBatchConfig, generate_deals};
use dforge_persona::FakePersona;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    #[test]
    fn any_count_yields_exactly_that_many_sequential_ids(
        count in 0u32..64,
        seed in any::<u64>(),
    ) {
        let config = DealBatchConfig {
            count,
            as_of: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            reference_span: 120,
            unlinked_ratio: 0.1,
        };
        let deals = generate_deals(
            &config,
            &mut StdRng::seed_from_u64(seed),
            &mut FakePersona::seeded(seed),
        );

        prop_assert_eq!(deals.len(), count as usize);
        for (i, deal) in deals.iter().enumerate() {
            prop_assert_eq!(&deal.deal_id, &format!("DEAL_{:03}", i + 1));
        }
    }

    #[test]
    fn amounts_and_probabilities_stay_in_range(seed in any::<u64>()) {
        let config = DealBatchConfig {
            count: 32,
            as_of: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            reference_span: 120,
            unlinked_ratio: 0.1,
        };
        let deals = generate_deals(
            &config,
            &mut StdRng::seed_from_u64(seed),
            &mut FakePersona::seeded(seed),
        );

        for deal in &deals {
            prop_assert!(deal.amount >= 1000.0 && deal.amount <= 50_000.0);
            prop_assert!(deal.probability <= 100);
        }
    }
}
