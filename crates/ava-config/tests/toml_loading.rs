//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use ava_config::AvaConfig;
use ava_core::ExecutionContext;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
internal_url = "http://backend:8080/api"
public_url = "https://ava.example.com/api/"
user_agent = "ava-test"
"#,
        )?;

        let config: AvaConfig = Figment::from(Serialized::defaults(AvaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.internal_url, "http://backend:8080/api");
        assert_eq!(config.api.user_agent, "ava-test");
        assert!(config.api.is_configured());
        assert_eq!(
            config.api.base_url(ExecutionContext::Browser).unwrap(),
            "https://ava.example.com/api"
        );
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
public_url = "https://ava.example.com/api"
"#,
        )?;

        let config: AvaConfig = Figment::from(Serialized::defaults(AvaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.api.internal_url.is_empty());
        assert_eq!(config.api.user_agent, "ava-gateway/0.1");
        assert_eq!(config.general.format, "json");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".ava")?;
        jail.create_file(
            ".ava/config.toml",
            r#"
[session]
dir = "/tmp/ava-jail-session"

[general]
format = "raw"
"#,
        )?;

        let config: AvaConfig = AvaConfig::figment().extract()?;
        assert_eq!(config.session.dir, "/tmp/ava-jail-session");
        assert_eq!(config.general.format, "raw");
        Ok(())
    });
}

#[test]
fn env_beats_project_local_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".ava")?;
        jail.create_file(
            ".ava/config.toml",
            r#"
[api]
public_url = "https://from-file.example.com"
"#,
        )?;
        jail.set_env("AVA_API__PUBLIC_URL", "https://from-env.example.com");

        let config: AvaConfig = AvaConfig::figment().extract()?;
        assert_eq!(config.api.public_url, "https://from-env.example.com");
        Ok(())
    });
}
