use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;

/// Configuration for the directory
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Full database connection URL; takes precedence over the `db_*` parts
    #[serde(default)]
    pub database_url: Option<String>,

    #[serde(default = "default_host")]
    pub db_host: String,

    #[serde(default = "default_port")]
    pub db_port: u16,

    #[serde(default = "default_user")]
    pub db_user: String,

    #[serde(default)]
    pub db_password: String,

    #[serde(default = "default_name")]
    pub db_name: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_user() -> String {
    "postgres".to_string()
}

fn default_name() -> String {
    "client_database".to_string()
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function will:
    /// 1. Load variables from .env file if it exists
    /// 2. Deserialize environment variables into Config struct
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::from_env::<Config>()?;

        Ok(config)
    }

    /// Build a config that points straight at `url`
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            database_url: Some(url.into()),
            db_host: default_host(),
            db_port: default_port(),
            db_user: default_user(),
            db_password: String::new(),
            db_name: default_name(),
        }
    }

    /// The connection URL, assembled from the `db_*` parts when no full URL is set.
    /// User, password and database name are percent-encoded.
    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.clone();
        }

        let user = urlencoding::encode(&self.db_user);
        let name = urlencoding::encode(&self.db_name);
        if self.db_password.is_empty() {
            format!("postgres://{user}@{}:{}/{name}", self.db_host, self.db_port)
        } else {
            let password = urlencoding::encode(&self.db_password);
            format!(
                "postgres://{user}:{password}@{}:{}/{name}",
                self.db_host, self.db_port
            )
        }
    }
}

/// Initialize environment variables and load configuration
pub fn init() -> Result<Config> {
    let config = Config::load()?;

    Ok(config)
}
