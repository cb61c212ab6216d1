use analytics_portal::config::{AppConfig, Env};
use serial_test::serial;

// Environment variables are process-global, so these tests are serialized.
// std::env mutation is unsafe in edition 2024; safe here because #[serial]
// guarantees no concurrent reader.

fn clear_env() {
    unsafe {
        std::env::remove_var("APP_ENV");
        std::env::remove_var("BIND_ADDR");
    }
}

#[test]
#[serial]
fn load_defaults_to_local() {
    clear_env();

    let config = AppConfig::load();
    assert_eq!(config.env, Env::Local);
    assert_eq!(config.bind_addr, "0.0.0.0:3000");
}

#[test]
#[serial]
fn load_reads_production_marker() {
    clear_env();
    unsafe {
        std::env::set_var("APP_ENV", "production");
    }

    let config = AppConfig::load();
    assert_eq!(config.env, Env::Production);

    clear_env();
}

#[test]
#[serial]
fn load_honors_bind_addr_override() {
    clear_env();
    unsafe {
        std::env::set_var("BIND_ADDR", "127.0.0.1:8088");
    }

    let config = AppConfig::load();
    assert_eq!(config.bind_addr, "127.0.0.1:8088");

    clear_env();
}

#[test]
#[serial]
fn unrecognized_app_env_falls_back_to_local() {
    clear_env();
    unsafe {
        std::env::set_var("APP_ENV", "staging");
    }

    let config = AppConfig::load();
    assert_eq!(config.env, Env::Local);

    clear_env();
}

#[test]
fn default_config_is_test_safe() {
    // Default binds an ephemeral local port and never reads the environment.
    let config = AppConfig::default();
    assert_eq!(config.env, Env::Local);
    assert_eq!(config.bind_addr, "127.0.0.1:0");
}
