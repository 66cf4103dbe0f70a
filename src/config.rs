use serde::Deserialize;
use std::env;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_RUN_ENV: &str = "local";

/// Name of the environment whose `config/{name}.toml` overlay is loaded.
pub fn run_env() -> String {
    env::var("RUN_ENV").unwrap_or_else(|_| DEFAULT_RUN_ENV.into())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Cross-origin policy. An origin of `"*"` allows any origin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CorsConfig {
    pub allow_origin: String,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
            },
            cors: CorsConfig {
                allow_origin: "*".to_string(),
                allow_methods: ["GET", "PUT", "PATCH", "POST", "DELETE"]
                    .map(String::from)
                    .to_vec(),
                allow_headers: vec!["Content-Type".to_string()],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Layers, lowest priority first: built-in defaults, `config/default.toml`,
    /// `config/{RUN_ENV}.toml`, `config/local.toml`, `APP__*` variables and
    /// finally the bare `PORT` variable.
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = run_env();
        let defaults = Self::default();

        let builder = ::config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("cors.allow_origin", defaults.cors.allow_origin)?
            .set_default("cors.allow_methods", defaults.cors.allow_methods)?
            .set_default("cors.allow_headers", defaults.cors.allow_headers)?
            .set_default("logging.level", defaults.logging.level)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("server.port", env::var("PORT").ok())?;

        builder.build()?.try_deserialize()
    }
}
