use serde::Deserialize;
use std::env::vars;
use std::fmt::Display;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Env {
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "test")]
    Test,
    #[serde(rename = "prod")]
    Prod,
}

impl Env {
    pub fn as_str(self) -> &'static str {
        match self {
            Env::Local => "local",
            Env::Test => "test",
            Env::Prod => "prod",
        }
    }
}

impl Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Validated configuration. Every field has been defaulted or checked.
#[derive(Debug, Clone)]
pub struct Config {
    env: Env,
    database_url: String,
    server_addr: String,
    port: u16,
    jwt_secret: String,
    // Snippets rated at or below this are flagged for review; unset flags all.
    review_rating_threshold: Option<i32>,
}

// Straight from the environment, before defaults are applied.
#[derive(Deserialize)]
struct RawConfig {
    env: Env,
    database_url: String,
    server_addr: Option<String>,
    port: Option<u16>,
    jwt_secret: Option<String>,
    review_rating_threshold: Option<i32>,
}

const DEV_JWT_SECRET: &str = "keyrace-local-development-secret";

impl Config {
    /// Local configuration with fixed values, for unit and integration tests.
    pub fn new_for_test() -> Self {
        Self {
            env: Env::Test,
            database_url: "postgres://localhost:5432/keyrace_test".to_string(),
            server_addr: "127.0.0.1".to_string(),
            port: 8080,
            jwt_secret: "test-jwt-secret-for-keyrace".to_string(),
            review_rating_threshold: None,
        }
    }

    #[must_use]
    pub fn with_review_rating_threshold(mut self, threshold: i32) -> Self {
        self.review_rating_threshold = Some(threshold);
        self
    }

    pub fn environment(&self) -> Env {
        self.env
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn review_rating_threshold(&self) -> Option<i32> {
        self.review_rating_threshold
    }

    pub fn is_local(&self) -> bool {
        matches!(self.env, Env::Local)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self.env, Env::Prod)
    }

    /// Reads the process environment. A `.env` file is honoured first when
    /// one exists, so local runs need no exported variables.
    pub fn init() -> anyhow::Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment overrides from {}", path.display());
        }

        info!("Loading configuration from environment variables");
        let raw_config: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw_config)
    }

    fn from_raw(raw_config: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            env,
            database_url,
            server_addr,
            port,
            jwt_secret,
            review_rating_threshold,
        } = raw_config;

        let server_addr = match server_addr {
            Some(addr) => {
                info!("Using provided SERVER_ADDR: {}", addr);
                addr
            }
            None => {
                let default_addr = match env {
                    Env::Local => "127.0.0.1",
                    Env::Test | Env::Prod => "0.0.0.0",
                };
                info!(
                    "SERVER_ADDR not set, defaulting to {} for {} environment",
                    default_addr, env
                );
                default_addr.to_string()
            }
        };

        let port = match port {
            Some(port) => port,
            None if matches!(env, Env::Local) => {
                info!("PORT not set, defaulting to 8080 for local environment");
                8080
            }
            None => anyhow::bail!("PORT must be set for {} environment", env),
        };

        let jwt_secret = match jwt_secret {
            Some(secret) => secret,
            None if matches!(env, Env::Local | Env::Test) => {
                info!("JWT_SECRET not set, using default for {} environment", env);
                DEV_JWT_SECRET.to_string()
            }
            None => anyhow::bail!("JWT_SECRET must be set for {} environment", env),
        };

        match review_rating_threshold {
            Some(threshold) => info!(threshold, "Review queue lists snippets rated at or below threshold"),
            None => info!("REVIEW_RATING_THRESHOLD not set, review queue lists every snippet"),
        }

        Ok(Config {
            env,
            database_url,
            server_addr,
            port,
            jwt_secret,
            review_rating_threshold,
        })
    }
}
