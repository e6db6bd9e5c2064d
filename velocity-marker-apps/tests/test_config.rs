use velocity_marker_apps::VelocityMarkerConfig;

#[test]
fn verify_sample_configs() {
    let files = vec![
        "config/velocity_marker_sample.toml",
        "config/velocity_marker_stamped_sample.toml",
    ];
    for f in files {
        let result = VelocityMarkerConfig::try_new(f);
        assert!(result.is_ok(), "{f:?} {result:?}");
        let ser_result = toml::to_string(&result.unwrap());
        assert!(ser_result.is_ok(), "{f:?} {ser_result:?}");
    }
}

#[test]
fn ser_default_config() {
    toml::to_string(&VelocityMarkerConfig::default()).unwrap();
}

#[test]
fn no_file_error() {
    let result = VelocityMarkerConfig::try_new("config/no_such_file.toml");
    assert!(matches!(
        result,
        Err(velocity_marker_apps::Error::NoFile(..))
    ));
}
