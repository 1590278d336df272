use std::collections::HashSet;

use proptest::prelude::*;
use relevancy_core::config::RelevancyConfig;
use relevancy_core::models::{Descriptor, DescriptorId};
use relevancy_core::traits::IRelevancyIndex;
use relevancy_svm::kernel::histogram_intersection;
use relevancy_svm::SvmHikRelevancyIndex;

const DIMS: usize = 6;

fn arb_vector(dims: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..1.0, dims)
}

fn arb_descriptors(namespace: &'static str, max: usize) -> impl Strategy<Value = Vec<Descriptor>> {
    prop::collection::vec(arb_vector(DIMS), 1..max).prop_map(move |vectors| {
        vectors
            .into_iter()
            .enumerate()
            .map(|(i, v)| Descriptor::new(DescriptorId::new(namespace, i as u64), v))
            .collect()
    })
}

fn engine(config: RelevancyConfig, index: &[Descriptor]) -> SvmHikRelevancyIndex {
    let mut engine = SvmHikRelevancyIndex::new(config).unwrap();
    engine.build_index(index.to_vec()).unwrap();
    engine
}

// ── Kernel ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn kernel_is_symmetric(a in arb_vector(DIMS), b in arb_vector(DIMS)) {
        prop_assert_eq!(
            histogram_intersection(&a, &b).unwrap(),
            histogram_intersection(&b, &a).unwrap()
        );
    }

    #[test]
    fn self_kernel_is_total_mass(a in arb_vector(DIMS)) {
        prop_assert_eq!(histogram_intersection(&a, &a).unwrap(), a.iter().sum::<f64>());
    }

    #[test]
    fn kernel_is_bounded_by_smaller_mass(a in arb_vector(DIMS), b in arb_vector(DIMS)) {
        let k = histogram_intersection(&a, &b).unwrap();
        let bound = a.iter().sum::<f64>().min(b.iter().sum::<f64>());
        prop_assert!(k >= 0.0);
        prop_assert!(k <= bound + 1e-12);
    }
}

// ── Ranking ──────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ranking_covers_exactly_the_index(
        index in arb_descriptors("index", 40),
        positives in arb_descriptors("query", 4),
    ) {
        let engine = engine(RelevancyConfig::default(), &index);
        let ranking = engine.rank(&positives, &[]).unwrap();
        let got: HashSet<&DescriptorId> = ranking.keys().collect();
        let want: HashSet<&DescriptorId> = index.iter().map(Descriptor::id).collect();
        prop_assert_eq!(got, want);
        prop_assert!(ranking.values().all(|s| s.is_finite()));
    }

    #[test]
    fn ranking_is_repeatable(
        index in arb_descriptors("index", 30),
        positives in arb_descriptors("query", 3),
        negatives in arb_descriptors("neg", 3),
    ) {
        let engine = engine(RelevancyConfig::default(), &index);
        let first = engine.rank(&positives, &negatives).unwrap();
        let second = engine.rank(&positives, &negatives).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parallel_ranking_matches_sequential(
        index in arb_descriptors("index", 150),
        positives in arb_descriptors("query", 3),
    ) {
        let sequential = engine(RelevancyConfig::default(), &index);
        let parallel = engine(
            RelevancyConfig {
                multiprocess_fetch: true,
                cores: Some(3),
                ..Default::default()
            },
            &index,
        );
        prop_assert_eq!(
            sequential.rank(&positives, &[]).unwrap(),
            parallel.rank(&positives, &[]).unwrap()
        );
    }

    #[test]
    fn identical_vectors_score_equally(
        index in arb_descriptors("index", 20),
        positives in arb_descriptors("query", 3),
        negatives in arb_descriptors("neg", 3),
    ) {
        // Append a twin of the first descriptor under a fresh identity.
        let mut with_twin = index.clone();
        let twin_id = DescriptorId::new("twin", 0);
        with_twin.push(Descriptor::new(twin_id.clone(), index[0].vector().to_vec()));

        let engine = engine(RelevancyConfig::default(), &with_twin);
        let ranking = engine.rank(&positives, &negatives).unwrap();
        prop_assert_eq!(ranking[index[0].id()], ranking[&twin_id]);
    }
}
