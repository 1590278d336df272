use relevancy_core::config::RelevancyConfig;
use relevancy_core::RelevancyError;
use relevancy_svm::{available_implementations, create_relevancy_index};
use test_fixtures::axis_scenario;

#[test]
fn lists_the_svm_hik_implementation() {
    assert_eq!(available_implementations(), &["svm_hik"]);
}

#[test]
fn creates_by_canonical_name_and_alias() {
    for name in ["svm_hik", "libsvm_hik"] {
        let index = create_relevancy_index(name, RelevancyConfig::default()).unwrap();
        assert_eq!(index.name(), "svm_hik");
        assert_eq!(index.count(), 0);
    }
}

#[test]
fn created_index_ranks_through_the_trait_object() {
    let scenario = axis_scenario();
    let mut index = create_relevancy_index("svm_hik", RelevancyConfig::default()).unwrap();
    index.build_index(scenario.index.clone()).unwrap();
    let ranking = index.rank(&scenario.positives, &scenario.negatives).unwrap();
    assert_eq!(ranking.len(), 7);
}

#[test]
fn unknown_name_is_rejected() {
    let err = create_relevancy_index("libsvm_rbf", RelevancyConfig::default())
        .err()
        .unwrap();
    assert!(matches!(err, RelevancyError::UnknownImplementation { ref name } if name == "libsvm_rbf"));
}

#[test]
fn factory_validates_config() {
    let config = RelevancyConfig {
        cores: Some(0),
        ..Default::default()
    };
    assert!(create_relevancy_index("svm_hik", config).is_err());
}
