use relevancy_core::models::*;
use proptest::prelude::*;

fn arb_ranking() -> impl Strategy<Value = Ranking> {
    prop::collection::hash_map(
        (0u64..50).prop_map(|seq| DescriptorId::new("index", seq)),
        // Coarse grid so equal scores show up often.
        (-4i32..=4).prop_map(|s| s as f64 * 0.25),
        0..30,
    )
}

proptest! {
    #[test]
    fn sorted_ranking_is_a_permutation(ranking in arb_ranking()) {
        let ordered = sort_ranking(&ranking);
        prop_assert_eq!(ordered.len(), ranking.len());
        for (id, score) in &ordered {
            prop_assert_eq!(ranking.get(id), Some(score));
        }
    }

    #[test]
    fn sorted_ranking_is_non_increasing_with_id_tiebreak(ranking in arb_ranking()) {
        let ordered = sort_ranking(&ranking);
        for pair in ordered.windows(2) {
            let (id_a, a) = &pair[0];
            let (id_b, b) = &pair[1];
            prop_assert!(a >= b);
            if a == b {
                prop_assert!(id_a < id_b);
            }
        }
    }
}
