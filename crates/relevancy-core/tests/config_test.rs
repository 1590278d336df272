use relevancy_core::config::*;
use relevancy_core::RelevancyError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = RelevancyConfig::from_toml("").unwrap();

    assert_eq!(config.descr_cache_filepath, None);
    assert_eq!(config.autoneg_select_ratio, 1);
    assert!(!config.multiprocess_fetch);
    assert_eq!(config.cores, None);
    assert_eq!(config.negative_selection, NegativeSelection::Farthest);

    assert_eq!(config.svm.c, 2.0);
    assert!(config.svm.auto_positive_weight);
    assert_eq!(config.svm.negative_weight, 1.0);
    assert_eq!(config.svm.tolerance, 1e-3);
    assert_eq!(config.svm.max_iterations, 100_000);
    assert_eq!(config.svm.score_mode, ScoreMode::Decision);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
descr_cache_filepath = "/tmp/descr.json"
multiprocess_fetch = true
cores = 4

[negative_selection]
policy = "random"
seed = 7

[svm]
c = 8.0
score_mode = "probability"
"#;
    let config = RelevancyConfig::from_toml(toml).unwrap();
    assert_eq!(config.descr_cache_filepath.as_deref(), Some("/tmp/descr.json"));
    assert!(config.multiprocess_fetch);
    assert_eq!(config.cores, Some(4));
    assert_eq!(config.negative_selection, NegativeSelection::Random { seed: 7 });
    assert_eq!(config.svm.c, 8.0);
    assert_eq!(config.svm.score_mode, ScoreMode::Probability);
    // Non-overridden fields keep defaults
    assert_eq!(config.autoneg_select_ratio, 1);
    assert_eq!(config.svm.max_iterations, 100_000);
}

#[test]
fn config_toml_roundtrip() {
    let config = RelevancyConfig {
        descr_cache_filepath: Some("cache.json".into()),
        cores: Some(2),
        ..Default::default()
    };
    let toml_str = config.to_toml().unwrap();
    let roundtripped = RelevancyConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn config_map_roundtrip_preserves_recognized_options() {
    let config = RelevancyConfig {
        descr_cache_filepath: Some("foobar.thing".into()),
        autoneg_select_ratio: 89,
        multiprocess_fetch: true,
        cores: Some(1),
        ..Default::default()
    };
    let map = config.to_map().unwrap();
    assert_eq!(map["descr_cache_filepath"], "foobar.thing");
    assert_eq!(map["autoneg_select_ratio"], 89);
    assert_eq!(map["multiprocess_fetch"], true);
    assert_eq!(map["cores"], 1);

    let rebuilt = RelevancyConfig::from_map(map.clone()).unwrap();
    assert_eq!(rebuilt, config);
    assert_eq!(rebuilt.to_map().unwrap(), map);
}

#[test]
fn config_from_partial_map_fills_defaults() {
    let mut map = ConfigMap::new();
    map.insert("autoneg_select_ratio".into(), serde_json::json!(3));
    let config = RelevancyConfig::from_map(map).unwrap();
    assert_eq!(config.autoneg_select_ratio, 3);
    assert_eq!(config.svm, SvmConfig::default());
}

#[test]
fn config_from_map_rejects_wrong_types() {
    let mut map = ConfigMap::new();
    map.insert("multiprocess_fetch".into(), serde_json::json!("yes"));
    let err = RelevancyConfig::from_map(map).unwrap_err();
    assert!(matches!(err, RelevancyError::InvalidConfig { .. }));
}

#[test]
fn validate_rejects_zero_cores() {
    let config = RelevancyConfig {
        cores: Some(0),
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("cores"));
}

#[test]
fn validate_rejects_non_positive_c() {
    let mut config = RelevancyConfig::default();
    config.svm.c = 0.0;
    assert!(config.validate().is_err());
    config.svm.c = f64::INFINITY;
    assert!(config.validate().is_err());
}

#[test]
fn validate_accepts_defaults() {
    assert!(RelevancyConfig::default().validate().is_ok());
}

#[test]
fn auto_positive_weight_balances_classes() {
    let svm = SvmConfig::default();
    assert_eq!(svm.class_weights(1, 1), (1.0, 1.0));
    assert_eq!(svm.class_weights(2, 6), (3.0, 1.0));
    // Never below 1 when positives dominate.
    assert_eq!(svm.class_weights(5, 1), (1.0, 1.0));
}

#[test]
fn manual_positive_weight_is_used_verbatim() {
    let svm = SvmConfig {
        auto_positive_weight: false,
        positive_weight: 0.5,
        negative_weight: 4.0,
        ..Default::default()
    };
    assert_eq!(svm.class_weights(1, 10), (0.5, 4.0));
}
