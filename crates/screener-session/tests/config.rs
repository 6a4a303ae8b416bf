use screener_session::config::{ScreenerConfig, load_config, save_config};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config.config_version, 1);
    assert!(config.include_history);
    assert_eq!(
        config.report_options().disclaimer,
        "This is not a diagnosis. Please share with a clinician."
    );
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = ScreenerConfig {
        clinic_name: "Northside Clinic".to_string(),
        clinician_name: "Dr. Okafor".to_string(),
        clinician_email: "okafor@example.org".to_string(),
        include_history: false,
        ..ScreenerConfig::default()
    };
    save_config(&path, &config).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.clinician_name, "Dr. Okafor");
    assert_eq!(loaded.recipient().email, "okafor@example.org");
    assert!(!loaded.report_options().include_history);
    assert!(!path.with_extension("json.tmp").exists());
}

#[cfg(unix)]
#[test]
fn saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config(&path, &ScreenerConfig::default()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn v0_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "clinic_name": "Old Clinic",
            "clinician_name": "Dr. Lee",
            "clinician_email": "lee@example.org",
            "created_at": "2024-01-01T00:00:00Z"
        }"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.clinic_name, "Old Clinic");
    assert!(config.include_history);
    assert!(config.disclaimer.starts_with("This is not a diagnosis."));
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 99 }"#).unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}
