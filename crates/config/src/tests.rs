use crate::AppConfig;

#[test]
fn test_defaults_without_config_files() {
    let config = AppConfig::load("does-not-exist").expect("defaults should apply");
    assert_eq!(config.server.host, "[::]");
    assert_eq!(config.server.port, 50051);
    assert_eq!(config.server.worker_threads, 10);
    assert_eq!(config.telemetry.log_level, "info");
    assert_eq!(config.listen_addr(), "[::]:50051");
}

#[test]
fn test_load_from_toml_file() {
    let dir = std::env::temp_dir().join(format!("salut-config-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("default.toml"),
        r#"
app_name = "greeter"
app_env = "production"

[server]
host = "127.0.0.1"
port = 50052

[telemetry]
log_level = "debug"
"#,
    )
    .unwrap();

    let config = AppConfig::load(dir.to_str().unwrap()).expect("config should load");
    assert_eq!(config.app_name, "greeter");
    assert!(config.is_production());
    assert_eq!(config.server.port, 50052);
    // 未出现的字段回落到默认值
    assert_eq!(config.server.worker_threads, 10);
    assert_eq!(config.telemetry.log_level, "debug");
    assert_eq!(config.listen_addr(), "127.0.0.1:50052");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_env_helpers() {
    let config = AppConfig::load("does-not-exist").unwrap();
    assert!(config.is_development());
    assert!(!config.is_production());
}
