use std::env;

/// AppConfig
///
/// The application's immutable runtime configuration, loaded once at startup
/// and shared read-only with every request. The navigation core itself needs
/// nothing from the environment; configuration covers only the serving
/// surface around it.
#[derive(Clone)]
pub struct AppConfig {
    /// Socket address the HTTP server binds, e.g. "0.0.0.0:3000".
    pub bind_addr: String,
    /// Runtime environment marker. Controls the log output format.
    pub env: Env,
}

/// Env
///
/// Defines the runtime context: human-readable logs locally, JSON logs in
/// production for ingestion by centralized aggregators.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// Provides a safe, non-panicking AppConfig instance primarily used for
    /// test setup, without requiring any environment variables.
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:0".to_string(),
            env: Env::Local,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing the configuration at startup.
    /// `APP_ENV` selects the environment ("production" or anything else for
    /// local); `BIND_ADDR` overrides the listen address and falls back to
    /// the conventional local default.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Self { bind_addr, env }
    }
}
