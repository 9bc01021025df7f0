use attest_config::AttestConfig;
use figment::Jail;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("ATTEST_SERVER__PORT", "9191");
        jail.set_env("ATTEST_CLIENT__BASE_URL", "http://checklists.internal:8080");

        let config = AttestConfig::load().expect("config loads");
        assert_eq!(config.server.port, 9191);
        assert_eq!(config.client.base_url, "http://checklists.internal:8080");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".attest")?;
        jail.create_file(
            ".attest/config.toml",
            r#"
[server]
port = 7000
host = "0.0.0.0"
"#,
        )?;
        jail.set_env("ATTEST_SERVER__PORT", "7001");

        let config = AttestConfig::load().expect("config loads");
        assert_eq!(config.server.port, 7001);
        assert_eq!(config.server.host, "0.0.0.0");
        Ok(())
    });
}

#[test]
fn cors_origins_parse_from_env_array() {
    Jail::expect_with(|jail| {
        jail.set_env(
            "ATTEST_SERVER__CORS_ORIGINS",
            "[\"http://a.example\", \"http://b.example\"]",
        );

        let config = AttestConfig::load().expect("config loads");
        assert_eq!(
            config.server.cors_origins,
            vec!["http://a.example".to_string(), "http://b.example".to_string()]
        );
        Ok(())
    });
}

#[test]
fn seed_flag_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("ATTEST_GENERAL__SEED_ON_STARTUP", "false");

        let config = AttestConfig::load().expect("config loads");
        assert!(!config.general.seed_on_startup);
        Ok(())
    });
}
